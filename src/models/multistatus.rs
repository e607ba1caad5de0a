use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    /// `None` when only the name was requested or the property is missing.
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropStat {
    pub status: u16,
    pub props: Vec<Property>,
}

/// One `<response>` element of a multistatus body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub href: String,
    pub propstats: Vec<PropStat>,
}

impl StatusRecord {
    pub fn prop(&self, name: &str) -> Option<(&Property, u16)> {
        self.propstats.iter().find_map(|ps| {
            ps.props
                .iter()
                .find(|p| p.name == name)
                .map(|p| (p, ps.status))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiStatus {
    pub responses: Vec<StatusRecord>,
}

impl MultiStatus {
    pub fn new(responses: Vec<StatusRecord>) -> Self {
        Self { responses }
    }

    pub fn hrefs(&self) -> Vec<&str> {
        self.responses.iter().map(|r| r.href.as_str()).collect()
    }
}
