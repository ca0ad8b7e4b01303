//! Built-in legacy key list
//!
//! Keys that moved to `FoodLocalizations` and are no longer referenced by the
//! core app bundle.

const DEFAULT_LEGACY_KEYS: &[&str] = &[
    "loadingFood",
    "nutrientsAdvancedMacros",
    "nutrientsProteins",
    "nutrientsCarbs",
    "nutrientsFats",
    "nutrientsMinerals",
    "nutrientsSynergy",
    "recipesQuick",
    "recipesCulinaryIntel",
    "recipesExpertTip",
    "labelGlycemicImpact",
    "labelFattyAcids",
    "labelAminoProfile",
    "foodSafetyBio",
    "foodIdealMoment",
    "foodCriticalAlerts",
    "foodBioChem",
    "foodPreservation",
    "foodSmartSwap",
    "foodDisclaimer",
    "foodVerdict",
    "foodPros",
    "foodCons",
    "foodBiohacking",
    "foodSatietyIndex",
    "foodBodyBenefits",
    "foodAttention",
    "foodFocusEnergy",
    "foodHistoryTitle",
    "foodHistoryEmpty",
    "foodReload",
    "foodKcalPer100g",
    "foodDeleteConfirmTitle",
];

/// Owned copy of the built-in list, in declaration order
pub fn default_keys() -> Vec<String> {
    DEFAULT_LEGACY_KEYS.iter().map(|k| (*k).to_string()).collect()
}
