use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Rendered form of the ellipsis marker.
pub const ELLIPSIS: &str = "...";

/// One entry of a page window: a clickable page or a static separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLabel {
    Page(u32),
    Ellipsis,
}

impl PageLabel {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageLabel::Page(page) => Some(*page),
            PageLabel::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageLabel::Ellipsis)
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Page(page) => write!(f, "{}", page),
            PageLabel::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

// Pages go over the wire as bare numbers and the marker as "...", which is
// what the dashboard front end already switches on.
impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLabel::Page(page) => serializer.serialize_u32(*page),
            PageLabel::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

impl<'de> Deserialize<'de> for PageLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelVisitor;

        impl<'de> de::Visitor<'de> for LabelVisitor {
            type Value = PageLabel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a page number or \"{}\"", ELLIPSIS)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<PageLabel, E> {
                u32::try_from(value)
                    .map(PageLabel::Page)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<PageLabel, E> {
                u32::try_from(value)
                    .map(PageLabel::Page)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PageLabel, E> {
                match value {
                    ELLIPSIS => Ok(PageLabel::Ellipsis),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(LabelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_like_the_front_end_expects() {
        let labels = vec![PageLabel::Page(1), PageLabel::Ellipsis, PageLabel::Page(20)];
        assert_eq!(serde_json::to_value(&labels).unwrap(), json!([1, "...", 20]));
    }

    #[test]
    fn rejects_unknown_markers() {
        assert!(serde_json::from_value::<PageLabel>(json!("…")).is_err());
        assert!(serde_json::from_value::<PageLabel>(json!(-1)).is_err());
        assert_eq!(
            serde_json::from_value::<PageLabel>(json!("...")).unwrap(),
            PageLabel::Ellipsis
        );
    }

    #[test]
    fn display() {
        assert_eq!(PageLabel::Page(7).to_string(), "7");
        assert_eq!(PageLabel::Ellipsis.to_string(), "...");
        assert_eq!(PageLabel::Page(3).page(), Some(3));
        assert!(PageLabel::Ellipsis.is_ellipsis());
    }
}
