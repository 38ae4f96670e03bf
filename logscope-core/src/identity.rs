use crate::aggregate::Tally;
use serde::Serialize;
use std::collections::BTreeMap;
use woothee::parser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Desktop,
    Mobile,
    Appliance,
    Bot,
    Unknown,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Desktop => "desktop",
            DeviceClass::Mobile => "mobile",
            DeviceClass::Appliance => "appliance",
            DeviceClass::Bot => "bot",
            DeviceClass::Unknown => "unknown",
        }
    }
}

/// Request counts split by what the user agents claim to be.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentitySummary {
    pub human: u64,
    pub bot: u64,
    pub unknown: u64,
    pub devices: BTreeMap<DeviceClass, u64>,
}

pub struct Classifier {
    parser: Parser,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn classify(&self, ua: &str) -> DeviceClass {
        let Some(result) = self.parser.parse(ua) else {
            return DeviceClass::Unknown;
        };

        match result.category {
            "pc" => DeviceClass::Desktop,
            "smartphone" | "mobilephone" => DeviceClass::Mobile,
            "appliance" => DeviceClass::Appliance,
            "crawler" => DeviceClass::Bot,
            _ => DeviceClass::Unknown,
        }
    }

    /// Classifies each distinct user agent once, weighted by its count.
    pub fn summarize(&self, user_agents: &Tally) -> IdentitySummary {
        let mut summary = IdentitySummary::default();

        for (ua, count) in user_agents.iter() {
            let class = self.classify(ua);
            match class {
                DeviceClass::Bot => summary.bot += count,
                DeviceClass::Unknown => summary.unknown += count,
                _ => summary.human += count,
            }
            *summary.devices.entry(class).or_insert(0) += count;
        }

        summary
    }
}
