//! Static item catalog: categories, models, brands, and base prices
//!
//! Everything the generators sample from lives here as immutable
//! compile-time tables. The numbers are seed data for import testing,
//! not validated business rules; edit them freely.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::sampler::{QuantityModel, WeightedRange};

/// Price floors applied after randomized offsets
pub const PURCHASE_FLOOR: i64 = 1;
pub const SALE_FLOOR: i64 = 2;
pub const RENTAL_FLOOR: i64 = 1;

/// The four record categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MedicalDevice,
    DiagnosticDevice,
    Accessory,
    SparePart,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MedicalDevice => "medical-device",
            Category::DiagnosticDevice => "diagnostic-device",
            Category::Accessory => "accessory",
            Category::SparePart => "spare-part",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::MedicalDevice,
            Category::DiagnosticDevice,
            Category::Accessory,
            Category::SparePart,
        ]
    }

    /// Output file stem for this category
    pub fn file_stem(&self) -> &'static str {
        match self {
            Category::MedicalDevice => "import_medical_devices_yuwell",
            Category::DiagnosticDevice => "import_diagnostic_devices",
            Category::Accessory => "import_accessories",
            Category::SparePart => "import_spare_parts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "medical-device" | "medical-devices" => Ok(Category::MedicalDevice),
            "diagnostic-device" | "diagnostic-devices" => Ok(Category::DiagnosticDevice),
            "accessory" | "accessories" => Ok(Category::Accessory),
            "spare-part" | "spare-parts" => Ok(Category::SparePart),
            _ => Err(format!(
                "Invalid category: {}. Use medical-device, diagnostic-device, accessory, or spare-part",
                s
            )),
        }
    }
}

/// Base prices before the randomized offset
#[derive(Debug, Clone, Copy)]
pub struct BasePrice {
    pub purchase: i64,
    pub sale: i64,
    /// Rental pricing only exists for medical devices
    pub rental: Option<i64>,
}

/// Bounded random offsets added to base prices, per category
#[derive(Debug, Clone, Copy)]
pub struct PriceJitter {
    pub purchase: (i64, i64),
    pub sale: (i64, i64),
    pub rental: (i64, i64),
}

pub const MEDICAL_JITTER: PriceJitter = PriceJitter {
    purchase: (-100, 200),
    sale: (-100, 300),
    rental: (-10, 20),
};

pub const DIAGNOSTIC_JITTER: PriceJitter = PriceJitter {
    purchase: (-10, 20),
    sale: (-10, 30),
    rental: (0, 0),
};

pub const ACCESSORY_JITTER: PriceJitter = PriceJitter {
    purchase: (-5, 10),
    sale: (-5, 15),
    rental: (0, 0),
};

pub const SPARE_PART_JITTER: PriceJitter = PriceJitter {
    purchase: (-10, 20),
    sale: (-10, 30),
    rental: (0, 0),
};

// ---------------------------------------------------------------------------
// Medical devices (single-brand: Yuwell)
// ---------------------------------------------------------------------------

pub const MEDICAL_BRAND: &str = "Yuwell";

/// Serial number prefix for medical devices
pub const MEDICAL_SERIAL_PREFIX: &str = "YW";

#[derive(Debug, Clone, Copy)]
pub struct MedicalType {
    pub name: &'static str,
    pub models: &'static [&'static str],
    pub base: BasePrice,
}

pub const MEDICAL_TYPES: &[MedicalType] = &[
    MedicalType {
        name: "CPAP",
        models: &["YH-450", "YH-550", "YH-560", "YH-580", "YH-660"],
        base: BasePrice { purchase: 800, sale: 1200, rental: Some(50) },
    },
    MedicalType {
        name: "VNI",
        models: &["YH-720ST", "YH-730", "YH-825", "YH-830"],
        base: BasePrice { purchase: 1500, sale: 2200, rental: Some(80) },
    },
    MedicalType {
        name: "Concentrateur O²",
        models: &["YU300", "YU500", "7F-3", "7F-5", "7F-8", "7F-10"],
        base: BasePrice { purchase: 1000, sale: 1500, rental: Some(60) },
    },
    MedicalType {
        name: "Vi",
        models: &["YH-450V", "YH-550V"],
        base: BasePrice { purchase: 2000, sale: 2800, rental: Some(100) },
    },
    MedicalType {
        name: "Bouteil O²",
        models: &["BO-5L", "BO-10L", "BO-15L", "BO-20L"],
        base: BasePrice { purchase: 200, sale: 350, rental: Some(20) },
    },
];

/// Stock quantity model: small serialized fleets, 1-5 units each
pub const MEDICAL_QUANTITY: QuantityModel =
    QuantityModel::new(&[WeightedRange { lo: 1, hi: 5, weight: 100 }]);

// ---------------------------------------------------------------------------
// Diagnostic devices
// ---------------------------------------------------------------------------

pub const DIAGNOSTIC_BRANDS: &[&str] =
    &["Omron", "Beurer", "Philips", "Medtronic", "GE Healthcare"];

/// A measurement parameter a diagnostic device reports, with its
/// plausible clinical range
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    pub unit: &'static str,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct DiagnosticType {
    pub name: &'static str,
    pub models: &'static [&'static str],
    pub base: BasePrice,
    pub parameters: &'static [Parameter],
}

pub const DIAGNOSTIC_TYPES: &[DiagnosticType] = &[
    DiagnosticType {
        name: "Tensiomètre",
        models: &["M3", "M7", "X7", "BM 58", "HEM-7361T"],
        base: BasePrice { purchase: 50, sale: 80, rental: None },
        parameters: &[
            Parameter { name: "Pression Systolique", unit: "mmHg", min: 60, max: 200 },
            Parameter { name: "Pression Diastolique", unit: "mmHg", min: 40, max: 130 },
            Parameter { name: "Fréquence Cardiaque", unit: "bpm", min: 40, max: 180 },
        ],
    },
    DiagnosticType {
        name: "Oxymètre",
        models: &["PO30", "PO60", "PO80", "OXY-100", "OXY-200"],
        base: BasePrice { purchase: 30, sale: 50, rental: None },
        parameters: &[
            Parameter { name: "SpO2", unit: "%", min: 70, max: 100 },
            Parameter { name: "Pouls", unit: "bpm", min: 40, max: 200 },
        ],
    },
    DiagnosticType {
        name: "Glucomètre",
        models: &["GL44", "GL50", "GL50 evo", "Contour Plus", "OneTouch"],
        base: BasePrice { purchase: 40, sale: 65, rental: None },
        parameters: &[
            Parameter { name: "Glycémie", unit: "mg/dL", min: 20, max: 600 },
        ],
    },
    DiagnosticType {
        name: "Thermomètre",
        models: &["FT90", "FT95", "TH-100", "TH-200", "Digital Pro"],
        base: BasePrice { purchase: 20, sale: 35, rental: None },
        parameters: &[
            Parameter { name: "Température", unit: "°C", min: 34, max: 42 },
        ],
    },
    DiagnosticType {
        name: "ECG",
        models: &["ECG-100", "ECG-200", "ECG-300", "CardioTouch", "HeartView"],
        base: BasePrice { purchase: 500, sale: 750, rental: None },
        parameters: &[
            Parameter { name: "Fréquence Cardiaque", unit: "bpm", min: 30, max: 250 },
            Parameter { name: "Intervalle PR", unit: "ms", min: 120, max: 200 },
            Parameter { name: "QRS", unit: "ms", min: 60, max: 120 },
            Parameter { name: "QT", unit: "ms", min: 350, max: 450 },
        ],
    },
];

// ---------------------------------------------------------------------------
// Accessories
// ---------------------------------------------------------------------------

pub const ACCESSORY_BRANDS: &[&str] =
    &["ResMed", "Philips", "Fisher & Paykel", "DeVilbiss", "Yuwell"];

#[derive(Debug, Clone, Copy)]
pub struct AccessoryType {
    pub name: &'static str,
    pub sub_types: &'static [&'static str],
    pub base: BasePrice,
}

pub const ACCESSORY_TYPES: &[AccessoryType] = &[
    AccessoryType {
        name: "Masque CPAP",
        sub_types: &["Nasal", "Facial", "Narinaire"],
        base: BasePrice { purchase: 30, sale: 80, rental: None },
    },
    AccessoryType {
        name: "Circuit Patient",
        sub_types: &["Standard", "Chauffant", "Antibactérien"],
        base: BasePrice { purchase: 15, sale: 40, rental: None },
    },
    AccessoryType {
        name: "Filtre",
        sub_types: &["Standard", "Antibactérien", "HEPA"],
        base: BasePrice { purchase: 5, sale: 20, rental: None },
    },
    AccessoryType {
        name: "Humidificateur",
        sub_types: &["H4i", "H5i", "HumidAir"],
        base: BasePrice { purchase: 50, sale: 120, rental: None },
    },
    AccessoryType {
        name: "Batterie",
        sub_types: &["12V", "24V", "Portable"],
        base: BasePrice { purchase: 80, sale: 200, rental: None },
    },
    AccessoryType {
        name: "Câble",
        sub_types: &["Alimentation", "USB", "Données"],
        base: BasePrice { purchase: 10, sale: 30, rental: None },
    },
    AccessoryType {
        name: "Sac de Transport",
        sub_types: &["Standard", "Premium", "Compact"],
        base: BasePrice { purchase: 25, sale: 60, rental: None },
    },
];

/// Consumable stock skews toward small counts
pub const ACCESSORY_QUANTITY: QuantityModel = QuantityModel::new(&[
    WeightedRange { lo: 5, hi: 20, weight: 40 },
    WeightedRange { lo: 21, hi: 50, weight: 30 },
    WeightedRange { lo: 51, hi: 100, weight: 20 },
    WeightedRange { lo: 101, hi: 200, weight: 10 },
]);

// ---------------------------------------------------------------------------
// Spare parts
// ---------------------------------------------------------------------------

pub const SPARE_PART_BRANDS: &[&str] = &["Generic", "OEM", "Yuwell", "Philips", "ResMed"];

#[derive(Debug, Clone, Copy)]
pub struct SparePartFamily {
    pub name: &'static str,
    pub part_types: &'static [&'static str],
    pub base: BasePrice,
}

pub const SPARE_PART_FAMILIES: &[SparePartFamily] = &[
    SparePartFamily {
        name: "Moteur",
        part_types: &["Turbine", "Compresseur", "Ventilateur"],
        base: BasePrice { purchase: 100, sale: 300, rental: None },
    },
    SparePartFamily {
        name: "Carte Électronique",
        part_types: &["Carte Mère", "Carte Alimentation", "Carte Contrôle"],
        base: BasePrice { purchase: 80, sale: 250, rental: None },
    },
    SparePartFamily {
        name: "Capteur",
        part_types: &["Pression", "Débit", "Température", "O2"],
        base: BasePrice { purchase: 30, sale: 100, rental: None },
    },
    SparePartFamily {
        name: "Valve",
        part_types: &["Expiratoire", "Inspiratoire", "Sécurité"],
        base: BasePrice { purchase: 20, sale: 60, rental: None },
    },
    SparePartFamily {
        name: "Joint",
        part_types: &["Torique", "Plat", "Conique"],
        base: BasePrice { purchase: 2, sale: 10, rental: None },
    },
    SparePartFamily {
        name: "Connecteur",
        part_types: &["Électrique", "Pneumatique", "USB"],
        base: BasePrice { purchase: 5, sale: 25, rental: None },
    },
    SparePartFamily {
        name: "Écran",
        part_types: &["LCD", "LED", "Tactile"],
        base: BasePrice { purchase: 50, sale: 150, rental: None },
    },
    SparePartFamily {
        name: "Bouton",
        part_types: &["Power", "Navigation", "Urgence"],
        base: BasePrice { purchase: 3, sale: 15, rental: None },
    },
];

/// Spare parts sit deeper in stock than consumables, with a long tail
pub const SPARE_PART_QUANTITY: QuantityModel = QuantityModel::new(&[
    WeightedRange { lo: 10, hi: 30, weight: 30 },
    WeightedRange { lo: 31, hi: 60, weight: 30 },
    WeightedRange { lo: 61, hi: 100, weight: 20 },
    WeightedRange { lo: 101, hi: 250, weight: 15 },
    WeightedRange { lo: 251, hi: 500, weight: 5 },
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for cat in Category::all() {
            let parsed: Category = cat.as_str().parse().unwrap();
            assert_eq!(parsed, *cat);
        }
    }

    #[test]
    fn test_category_accepts_plural() {
        assert_eq!("accessories".parse::<Category>().unwrap(), Category::Accessory);
        assert_eq!("spare-parts".parse::<Category>().unwrap(), Category::SparePart);
    }

    #[test]
    fn test_category_invalid() {
        assert!("furniture".parse::<Category>().is_err());
    }

    #[test]
    fn test_tables_are_populated() {
        assert!(!MEDICAL_TYPES.is_empty());
        assert!(!DIAGNOSTIC_TYPES.is_empty());
        assert!(!ACCESSORY_TYPES.is_empty());
        assert!(!SPARE_PART_FAMILIES.is_empty());

        for t in MEDICAL_TYPES {
            assert!(!t.models.is_empty(), "{} has no models", t.name);
        }
        for t in ACCESSORY_TYPES {
            assert!(!t.sub_types.is_empty(), "{} has no sub-types", t.name);
        }
        for f in SPARE_PART_FAMILIES {
            assert!(!f.part_types.is_empty(), "{} has no part types", f.name);
        }
    }

    #[test]
    fn test_all_diagnostic_types_have_parameters() {
        assert_eq!(DIAGNOSTIC_TYPES.len(), 5);
        for t in DIAGNOSTIC_TYPES {
            assert!(!t.parameters.is_empty(), "{} has no parameters", t.name);
            for p in t.parameters {
                assert!(p.min < p.max, "{} {} range inverted", t.name, p.name);
            }
        }
    }

    #[test]
    fn test_base_prices_positive() {
        for t in MEDICAL_TYPES {
            assert!(t.base.purchase > 0 && t.base.sale > 0);
            assert!(t.base.rental.unwrap_or(1) > 0);
        }
        for t in DIAGNOSTIC_TYPES {
            assert!(t.base.purchase > 0 && t.base.sale > 0);
            assert!(t.base.rental.is_none());
        }
        for t in ACCESSORY_TYPES {
            assert!(t.base.purchase > 0 && t.base.sale > 0);
        }
        for f in SPARE_PART_FAMILIES {
            assert!(f.base.purchase > 0 && f.base.sale > 0);
        }
    }

    #[test]
    fn test_medical_devices_all_have_rental_pricing() {
        for t in MEDICAL_TYPES {
            assert!(t.base.rental.is_some(), "{} missing rental price", t.name);
        }
    }
}
