/// Move damage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DamageClass {
    Physical,
    Special,
    Status,
}

impl DamageClass {
    pub fn from_api(s: &str) -> Option<Self> {
        match s {
            "physical" => Some(DamageClass::Physical),
            "special" => Some(DamageClass::Special),
            "status" => Some(DamageClass::Status),
            _ => None,
        }
    }

    pub fn as_api(&self) -> &'static str {
        match self {
            DamageClass::Physical => "physical",
            DamageClass::Special => "special",
            DamageClass::Status => "status",
        }
    }

    /// Portuguese display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DamageClass::Physical => "Físico",
            DamageClass::Special => "Especial",
            DamageClass::Status => "Status",
        }
    }
}
