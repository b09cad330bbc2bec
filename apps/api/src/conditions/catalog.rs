//! Condition knowledge base — the static catalog of skin conditions.
//!
//! Definition order is significant: detection reports matches in this order,
//! not in the order they appear in the analysed text.

use serde::Serialize;

/// Treatment options grouped by how they are delivered.
#[derive(Debug, Clone, Serialize)]
pub struct Treatments {
    pub topical: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
    pub professional: &'static [&'static str],
}

/// What each severity grade looks like for a condition.
#[derive(Debug, Clone, Serialize)]
pub struct Severity {
    pub mild: &'static str,
    pub moderate: &'static str,
    pub severe: &'static str,
}

/// A single catalog entry. Immutable, process-wide.
#[derive(Debug, Clone, Serialize)]
pub struct SkinCondition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub causes: &'static [&'static str],
    pub treatments: Treatments,
    pub severity: Severity,
}

impl SkinCondition {
    /// Lowercased forms of the display name that count as a mention.
    ///
    /// `"Comedones (Blackheads & Whiteheads)"` yields the full name plus
    /// `"blackheads"` and `"whiteheads"`.
    pub fn name_forms(&self) -> Vec<String> {
        let mut forms = vec![self.name.to_lowercase()];

        if let Some((_, rest)) = self.name.split_once('(') {
            let inner = rest.split(')').next().unwrap_or_default();
            forms.extend(
                inner
                    .split('&')
                    .map(|alt| alt.trim().to_lowercase())
                    .filter(|alt| !alt.is_empty()),
            );
        }

        forms
    }
}

pub static CATALOG: &[SkinCondition] = &[
    SkinCondition {
        id: "papules",
        name: "Inflammatory Papules",
        description: "Small, solid, raised bumps that are red and sometimes painful due to inflammation.",
        causes: &[
            "Excess sebum production",
            "Bacterial infection (P. acnes)",
            "Hormonal fluctuations",
            "Pore blockage",
        ],
        treatments: Treatments {
            topical: &[
                "Benzoyl peroxide (2.5-5%)",
                "Salicylic acid (1-2%)",
                "Niacinamide (5-10%)",
                "Retinoids (adapalene 0.1%)",
            ],
            lifestyle: &[
                "Gentle cleansing twice daily",
                "Avoid over-washing",
                "Non-comedogenic moisturizers",
                "Stress reduction techniques",
            ],
            professional: &[
                "Chemical peels",
                "Prescription antibiotics",
                "Stronger retinoids",
            ],
        },
        severity: Severity {
            mild: "Few scattered papules, minimal inflammation",
            moderate: "Multiple papules, noticeable inflammation in specific areas",
            severe: "Numerous papules, widespread inflammation, pain",
        },
    },
    SkinCondition {
        id: "pustules",
        name: "Pustules",
        description: "Small, inflamed bumps containing pus that appear red at the base with a white or yellow head.",
        causes: &[
            "Bacterial infection",
            "Inflammation",
            "Hormonal changes",
            "Excess oil production",
        ],
        treatments: Treatments {
            topical: &[
                "Benzoyl peroxide (5-10%)",
                "Salicylic acid (2%)",
                "Sulfur treatments",
                "Azelaic acid (15-20%)",
            ],
            lifestyle: &[
                "Avoid picking or squeezing",
                "Regular cleansing",
                "Oil-free skincare products",
                "Change pillowcases frequently",
            ],
            professional: &[
                "Extraction by a dermatologist",
                "Oral antibiotics",
                "Steroid injections for large pustules",
            ],
        },
        severity: Severity {
            mild: "Few scattered pustules that heal quickly",
            moderate: "Clusters of pustules that may leave temporary marks",
            severe: "Numerous pustules with significant inflammation and potential scarring",
        },
    },
    SkinCondition {
        id: "comedones",
        name: "Comedones (Blackheads & Whiteheads)",
        description: "Non-inflammatory acne lesions. Blackheads (open comedones) appear dark due to oxidation. Whiteheads (closed comedones) appear as small white or flesh-colored bumps.",
        causes: &[
            "Excess sebum production",
            "Dead skin cell buildup",
            "Pore blockage",
            "Slow cell turnover",
        ],
        treatments: Treatments {
            topical: &[
                "Salicylic acid (0.5-2%)",
                "Retinoids (differin, tretinoin)",
                "Glycolic acid (5-10%)",
                "Gentle chemical exfoliants",
            ],
            lifestyle: &[
                "Regular exfoliation",
                "Oil-free products",
                "Avoid heavy makeup",
                "Cleanse after sweating",
            ],
            professional: &["Extraction", "Chemical peels", "Microdermabrasion"],
        },
        severity: Severity {
            mild: "Few scattered comedones in limited areas",
            moderate: "Multiple comedones across several facial zones",
            severe: "Numerous comedones covering significant facial areas",
        },
    },
    SkinCondition {
        id: "nodular",
        name: "Nodular Acne",
        description: "Large, inflamed, painful bumps deep within the skin that feel hard to the touch and may not come to a head.",
        causes: &[
            "Severe inflammation",
            "Bacterial infection",
            "Hormonal disorders",
            "Genetic factors",
        ],
        treatments: Treatments {
            topical: &[
                "Prescription-strength retinoids",
                "Benzoyl peroxide (higher strengths)",
                "Topical antibiotics with benzoyl peroxide",
                "Azelaic acid (prescription strength)",
            ],
            lifestyle: &[
                "Gentle skincare routine",
                "Avoid irritating products",
                "Stress management",
                "Anti-inflammatory diet",
            ],
            professional: &[
                "Oral antibiotics",
                "Isotretinoin (Accutane)",
                "Steroid injections",
                "Hormonal treatments",
            ],
        },
        severity: Severity {
            mild: "Occasional nodules that resolve without scarring",
            moderate: "Multiple nodules with prolonged healing time",
            severe: "Numerous painful nodules with high risk of scarring",
        },
    },
    SkinCondition {
        id: "cystic",
        name: "Cystic Acne",
        description: "Most severe form of acne characterized by large, painful, pus-filled cysts deep within the skin that can lead to permanent scarring.",
        causes: &[
            "Severe inflammation",
            "Hormonal imbalances",
            "Genetic predisposition",
            "Bacterial infection",
        ],
        treatments: Treatments {
            topical: &[
                "Usually insufficient alone",
                "Prescription retinoids as adjunct therapy",
                "Benzoyl peroxide with antibiotics",
                "Anti-inflammatory agents",
            ],
            lifestyle: &[
                "Very gentle skincare",
                "Medical-grade non-comedogenic products",
                "Avoid all potential irritants",
                "Strict low glycemic diet",
            ],
            professional: &[
                "Isotretinoin (Accutane)",
                "Hormonal therapy",
                "Corticosteroid injections",
                "Drainage and surgical excision",
            ],
        },
        severity: Severity {
            mild: "Rare and isolated cysts",
            moderate: "Recurring cysts in specific areas",
            severe: "Multiple large, painful cysts with active inflammation",
        },
    },
    SkinCondition {
        id: "hormonal",
        name: "Hormonal Acne",
        description: "Acne tied to hormonal fluctuations, often appearing along the jawline, chin, and lower cheeks. May flare up during menstrual cycles, pregnancy, or with PCOS.",
        causes: &[
            "Androgen fluctuations",
            "Menstrual cycle changes",
            "Polycystic ovary syndrome",
            "Stress hormones",
            "Hormonal medications",
        ],
        treatments: Treatments {
            topical: &[
                "Retinoids",
                "Niacinamide (10%)",
                "Azelaic acid (20%)",
                "Benzoyl peroxide",
            ],
            lifestyle: &[
                "Anti-inflammatory diet",
                "Regular sleep schedule",
                "Stress management",
                "Avoid dairy and high-glycemic foods",
            ],
            professional: &[
                "Birth control pills",
                "Spironolactone",
                "Anti-androgen medications",
                "DIM supplements",
            ],
        },
        severity: Severity {
            mild: "Predictable flares around menstrual cycle with few lesions",
            moderate: "Regular breakouts with 5-20 inflammatory lesions",
            severe: "Persistent, painful, deep acne with scarring potential",
        },
    },
    SkinCondition {
        id: "rosacea",
        name: "Rosacea",
        description: "Chronic inflammatory skin condition causing redness, visible blood vessels, and sometimes small red bumps. Often mistaken for acne.",
        causes: &[
            "Genetic factors",
            "Blood vessel abnormalities",
            "Demodex mites",
            "Environmental triggers",
            "Immune system factors",
        ],
        treatments: Treatments {
            topical: &[
                "Metronidazole",
                "Azelaic acid",
                "Ivermectin",
                "Gentle anti-inflammatory products",
            ],
            lifestyle: &[
                "Identify and avoid triggers",
                "Sun protection (SPF 30+)",
                "Gentle skincare routine",
                "Cool compresses for flares",
            ],
            professional: &[
                "Laser therapy",
                "Oral antibiotics (low-dose)",
                "Prescription anti-inflammatory treatments",
                "Vascular laser treatments",
            ],
        },
        severity: Severity {
            mild: "Occasional flushing and mild redness",
            moderate: "Persistent redness with papules and pustules",
            severe: "Intense redness, many bumps, thickening skin, eye involvement",
        },
    },
];

/// Looks up a catalog entry by id.
pub fn find(id: &str) -> Option<&'static SkinCondition> {
    CATALOG.iter().find(|c| c.id == id)
}
