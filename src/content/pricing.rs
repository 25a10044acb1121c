// src/content/pricing.rs
//! Commission pricing lines: `"<type>; <VND price>; <USD price>"`.

use crate::constants::PRICING_DELIMITER;
use crate::model::Pricing;

impl Pricing {
    /// Parses a commission card description into a price record.
    ///
    /// Segments are trimmed and kept as display strings; nothing is checked
    /// to be numeric. Fewer than three segments means the card has no
    /// pricing block. Segments past the third are ignored.
    pub fn parse(description: &str) -> Option<Self> {
        let parts: Vec<&str> = description.split(PRICING_DELIMITER).map(str::trim).collect();
        let [kind, vnd, usd, ..] = parts.as_slice() else {
            return None;
        };

        Some(Self {
            kind: kind.to_string(),
            vnd: vnd.to_string(),
            usd: usd.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_three_segments() {
        assert_eq!(
            Pricing::parse("Sketch; 200000; 10"),
            Some(Pricing {
                kind: "Sketch".to_string(),
                vnd: "200000".to_string(),
                usd: "10".to_string(),
            })
        );
    }

    #[test]
    fn test_single_segment_has_no_pricing() {
        assert_eq!(Pricing::parse("Sketch only"), None);
        assert_eq!(Pricing::parse("Sketch; 200000"), None);
        assert_eq!(Pricing::parse(""), None);
    }

    #[test]
    fn test_extra_segments_are_discarded() {
        let pricing = Pricing::parse("Full colour ; 1.500.000đ ; $60 ; rush +50%").unwrap();
        assert_eq!(pricing.kind, "Full colour");
        assert_eq!(pricing.vnd, "1.500.000đ");
        assert_eq!(pricing.usd, "$60");
    }

    #[test]
    fn test_values_are_not_validated() {
        let pricing = Pricing::parse(";;").unwrap();
        assert_eq!(pricing.kind, "");
        assert_eq!(pricing.usd, "");
    }
}
