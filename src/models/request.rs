use serde::{Deserialize, Serialize};

/// HTTP verbs a WebDAV client may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DavMethod {
    Options,
    Get,
    Head,
    Put,
    Delete,
    Mkcol,
    Copy,
    Move,
    Propfind,
    Proppatch,
}

impl std::fmt::Display for DavMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Options => write!(f, "OPTIONS"),
            Self::Get => write!(f, "GET"),
            Self::Head => write!(f, "HEAD"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
            Self::Mkcol => write!(f, "MKCOL"),
            Self::Copy => write!(f, "COPY"),
            Self::Move => write!(f, "MOVE"),
            Self::Propfind => write!(f, "PROPFIND"),
            Self::Proppatch => write!(f, "PROPPATCH"),
        }
    }
}

impl std::str::FromStr for DavMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPTIONS" => Ok(Self::Options),
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "MKCOL" => Ok(Self::Mkcol),
            "COPY" => Ok(Self::Copy),
            "MOVE" => Ok(Self::Move),
            "PROPFIND" => Ok(Self::Propfind),
            "PROPPATCH" => Ok(Self::Proppatch),
            _ => Err(format!("unknown method: {s}")),
        }
    }
}

/// Value of the `Depth` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Depth {
    Zero,
    One,
    Infinity,
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zero => write!(f, "0"),
            Self::One => write!(f, "1"),
            Self::Infinity => write!(f, "infinity"),
        }
    }
}

impl std::str::FromStr for Depth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Zero),
            "1" => Ok(Self::One),
            v if v.eq_ignore_ascii_case("infinity") => Ok(Self::Infinity),
            _ => Err(format!("invalid depth: {s}")),
        }
    }
}

/// Property selection carried in a PROPFIND body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropFind {
    #[default]
    AllProp,
    PropName,
    Prop(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRequest {
    pub path: String,
    pub depth: Depth,
    #[serde(default)]
    pub propfind: PropFind,
}

impl ListingRequest {
    pub fn new(path: impl Into<String>, depth: Depth, propfind: PropFind) -> Self {
        Self {
            path: path.into(),
            depth,
            propfind,
        }
    }
}
