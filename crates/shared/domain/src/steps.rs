use crate::constants::{
    STEP_BRANCHES, STEP_BUSINESS, STEP_COMPETITORS, STEP_PERSONAL, STEP_SEGMENTS,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Represents the set of wizard steps a client has completed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StepSet: u32 {
        const PERSONAL = 1 << 0;
        const BUSINESS = 1 << 1;
        const BRANCHES = 1 << 2;
        const COMPETITORS = 1 << 3;
        const SEGMENTS = 1 << 4;

        const ALL = Self::PERSONAL.bits()
            | Self::BUSINESS.bits()
            | Self::BRANCHES.bits()
            | Self::COMPETITORS.bits()
            | Self::SEGMENTS.bits();
    }
}

impl From<&str> for StepSet {
    fn from(s: &str) -> Self {
        match s {
            STEP_PERSONAL => Self::PERSONAL,
            STEP_BUSINESS => Self::BUSINESS,
            STEP_BRANCHES => Self::BRANCHES,
            STEP_COMPETITORS => Self::COMPETITORS,
            STEP_SEGMENTS => Self::SEGMENTS,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for StepSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for StepSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for StepSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
