//! Code-to-description lookup for presentation
//!
//! The parser stores raw UN/LOCODE port codes, ISO 6346 size/type codes and
//! cargo codes. These helpers translate them for display, falling back to
//! the raw code when no entry is known.

use serde::Serialize;

const PORTS: &[(&str, &str)] = &[
    ("ECPBO", "Puerto Bolívar, Ecuador"),
    ("ECGYE", "Guayaquil, Ecuador"),
    ("ECESM", "Esmeraldas, Ecuador"),
    ("ECMEC", "Manta, Ecuador"),
    ("ECPTM", "Posorja Terminal, Ecuador"),
    ("PEPAI", "Paita, Peru"),
    ("PECLL", "Callao, Peru"),
    ("COBUN", "Buenaventura, Colombia"),
    ("COCTG", "Cartagena, Colombia"),
    ("PAMIT", "MIT Balboa, Panama"),
    ("PACRI", "Cristobal, Panama"),
    ("CLVAP", "Valparaiso, Chile"),
    ("CLSAI", "San Antonio, Chile"),
    ("USNYC", "New York, United States"),
    ("USLAX", "Los Angeles, United States"),
    ("USHOU", "Houston, United States"),
    ("USMIA", "Miami, United States"),
    ("MXZLO", "Manzanillo, Mexico"),
    ("FRLEH", "Le Havre, France"),
    ("NLRTM", "Rotterdam, Netherlands"),
    ("BEANR", "Antwerp, Belgium"),
    ("DEHAM", "Hamburg, Germany"),
    ("CNSHA", "Shanghai, China"),
    ("CNNBO", "Ningbo, China"),
    ("SGSIN", "Singapore"),
    ("JPYOK", "Yokohama, Japan"),
];

const COUNTRIES: &[(&str, &str)] = &[
    ("EC", "Ecuador"),
    ("PE", "Peru"),
    ("CO", "Colombia"),
    ("CL", "Chile"),
    ("PA", "Panama"),
    ("MX", "Mexico"),
    ("US", "United States"),
    ("CA", "Canada"),
    ("BR", "Brazil"),
    ("FR", "France"),
    ("ES", "Spain"),
    ("IT", "Italy"),
    ("DE", "Germany"),
    ("NL", "Netherlands"),
    ("BE", "Belgium"),
    ("GB", "United Kingdom"),
    ("CN", "China"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("SG", "Singapore"),
];

const CONTAINER_TYPES: &[(&str, &str)] = &[
    ("20G0", "20' Dry General Purpose"),
    ("20G1", "20' Dry General Purpose (Ventilated)"),
    ("22G0", "20' Dry General Purpose (>8'6\" high)"),
    ("22G1", "20' Dry General Purpose (>8'6\" high, Ventilated)"),
    ("40G0", "40' Dry General Purpose"),
    ("42G0", "40' Dry High Cube"),
    ("42G1", "40' Dry High Cube (Ventilated)"),
    ("45G0", "45' Dry General Purpose"),
    ("45G1", "40' High Cube General Purpose"),
    ("45R0", "45' Refrigerated"),
    ("45R1", "45' Refrigerated High Cube"),
    ("20R0", "20' Refrigerated"),
    ("22R0", "20' Refrigerated High Cube"),
    ("22R1", "20' Refrigerated High Cube (Ventilated)"),
    ("40R0", "40' Refrigerated"),
    ("42R0", "40' Refrigerated High Cube"),
    ("42R1", "40' Refrigerated High Cube (Ventilated)"),
    ("20U0", "20' Open Top"),
    ("40U0", "40' Open Top"),
    ("20P0", "20' Flat Rack"),
    ("40P0", "40' Flat Rack"),
    ("20T0", "20' Tank"),
    ("40T0", "40' Tank"),
];

const CARGO_TYPES: &[(&str, &str)] = &[
    ("FOODSTUFFS", "Foodstuffs"),
    ("DR", "Dry Cargo"),
    ("FROZEN", "Frozen"),
    ("CHILLED", "Chilled"),
    ("DANGEROUS", "Dangerous Goods"),
    ("FRAGILE", "Fragile"),
    ("HEAVY", "Heavy Cargo"),
    ("GENERAL", "General Cargo"),
];

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}

/// A code paired with its description for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedCode {
    pub code: String,
    /// Description, empty when none is known
    pub name: String,
    /// `"CODE - Name"`, or just the code without a description
    pub formatted: String,
}

impl FormattedCode {
    fn new(code: &str, description: String) -> Self {
        if code.is_empty() {
            return Self::default();
        }
        if description == code {
            return Self {
                code: code.to_string(),
                name: String::new(),
                formatted: code.to_string(),
            };
        }
        Self {
            code: code.to_string(),
            formatted: format!("{} - {}", code, description),
            name: description,
        }
    }
}

/// Country name for an ISO 3166 alpha-2 code, or the code itself
pub fn country_name(code: &str) -> String {
    lookup(COUNTRIES, code).map_or_else(|| code.to_string(), str::to_string)
}

/// Port name for a UN/LOCODE
///
/// Unknown ports fall back to `"CODE (Country)"` when the country prefix is
/// known, otherwise to the code.
pub fn port_name(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    if let Some(name) = lookup(PORTS, code) {
        return name.to_string();
    }

    code.get(0..2)
        .and_then(|prefix| lookup(COUNTRIES, prefix))
        .map_or_else(
            || code.to_string(),
            |country| format!("{} ({})", code, country),
        )
}

/// Description of an ISO size/type code, guessing from its prefix when unlisted
pub fn container_type(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    if let Some(description) = lookup(CONTAINER_TYPES, code) {
        return description.to_string();
    }

    let guess = if code.starts_with("20") {
        Some("20' Container")
    } else if code.starts_with("40") {
        Some("40' Container")
    } else if code.starts_with("45") {
        Some("45' Container")
    } else if code.contains('R') {
        Some("Refrigerated Container")
    } else if code.contains('G') {
        Some("Dry Container")
    } else {
        None
    };

    guess.map_or_else(|| code.to_string(), str::to_string)
}

/// Description of a cargo code, or the code itself
pub fn cargo_type(code: &str) -> String {
    lookup(CARGO_TYPES, code).map_or_else(|| code.to_string(), str::to_string)
}

pub fn format_port(code: &str) -> FormattedCode {
    FormattedCode::new(code, port_name(code))
}

pub fn format_container_type(code: &str) -> FormattedCode {
    FormattedCode::new(code, container_type(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_port() {
        assert_eq!(port_name("ECGYE"), "Guayaquil, Ecuador");
        let formatted = format_port("USLAX");
        assert_eq!(formatted.code, "USLAX");
        assert_eq!(formatted.name, "Los Angeles, United States");
        assert_eq!(formatted.formatted, "USLAX - Los Angeles, United States");
    }

    #[test]
    fn test_unknown_port_with_known_country() {
        assert_eq!(port_name("PEXXX"), "PEXXX (Peru)");
    }

    #[test]
    fn test_unknown_port_falls_back_to_code() {
        assert_eq!(port_name("ZZABC"), "ZZABC");
        let formatted = format_port("ZZABC");
        assert_eq!(formatted.name, "");
        assert_eq!(formatted.formatted, "ZZABC");
    }

    #[test]
    fn test_empty_codes() {
        assert_eq!(port_name(""), "");
        assert_eq!(format_port(""), FormattedCode::default());
        assert_eq!(format_container_type(""), FormattedCode::default());
    }

    #[test]
    fn test_container_type_guesses() {
        assert_eq!(
            container_type("22G0"),
            "20' Dry General Purpose (>8'6\" high)"
        );
        assert_eq!(container_type("20X9"), "20' Container");
        assert_eq!(container_type("L5R1"), "Refrigerated Container");
        assert_eq!(container_type("ZZZZ"), "ZZZZ");
    }

    #[test]
    fn test_cargo_and_country() {
        assert_eq!(cargo_type("FROZEN"), "Frozen");
        assert_eq!(cargo_type("BANANAS"), "BANANAS");
        assert_eq!(country_name("NL"), "Netherlands");
        assert_eq!(country_name("XX"), "XX");
    }
}
