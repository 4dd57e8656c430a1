//! Reusable client folder layouts.

/// Individual taxpayer missing MONOTRIBUTO, with an income-tax filing from
/// January 2023 (stale as of 2024-03).
pub const PERSONA_CLIENT: &str = "Juan Perez 20-12345678-9";

pub const PERSONA_FILES: &[&str] = &[
    "Juan Perez 20-12345678-9/DNI.pdf",
    "Juan Perez 20-12345678-9/CUIL.pdf",
    "Juan Perez 20-12345678-9/GANANCIAS ENE 23.pdf",
    "Juan Perez 20-12345678-9/BIENES MAR 24.pdf",
];

/// Small business holding every required document, all current as of 2024-03.
pub const PYME_CLIENT: &str = "Panaderia PYME SRL";

pub const PYME_FILES: &[&str] = &[
    "Panaderia PYME SRL/ESTATUTO.pdf",
    "Panaderia PYME SRL/CERTIFICADO MAR 24.pdf",
    "Panaderia PYME SRL/balances/BALANCE DIC 20.pdf",
    "Panaderia PYME SRL/IVA FEB 24.pdf",
    "Panaderia PYME SRL/IIBB ENE 24.pdf",
];

/// Audit month used by every CLI test.
pub const AS_OF: &str = "2024-03";

pub const MISSING_CSV: &str = "Estatus de legajos - faltantes.csv";
pub const OUTDATED_CSV: &str = "Estatus de legajos - desactualizados.csv";
