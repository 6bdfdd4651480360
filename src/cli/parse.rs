use grafo_core::format::OutputFormat;
use grafo_core::graph::{DuplicateEdgePolicy, Weight};

/// An edge given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Option<Weight>,
}

impl EdgeSpec {
    pub fn to_tuple(&self) -> (String, String, Option<Weight>) {
        (self.from.clone(), self.to.clone(), self.weight)
    }
}

/// Normalize a vertex label the way the menu reads it: trimmed, upper case
pub fn normalize_label(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Parse `FROM-TO` or `FROM-TO:WEIGHT`
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    let (pair, weight) = match s.rsplit_once(':') {
        Some((pair, weight)) => {
            let weight = weight.parse::<Weight>().map_err(|e| e.to_string())?;
            (pair, Some(weight))
        }
        None => (s, None),
    };

    let (from, to) = pair
        .split_once('-')
        .ok_or_else(|| format!("invalid edge '{}' (expected FROM-TO or FROM-TO:WEIGHT)", s))?;
    let from = normalize_label(from);
    let to = normalize_label(to);
    if from.is_empty() || to.is_empty() {
        return Err(format!("invalid edge '{}' (empty vertex label)", s));
    }

    Ok(EdgeSpec { from, to, weight })
}

/// Parse a vertex label argument
pub fn parse_label(s: &str) -> std::result::Result<String, String> {
    let label = normalize_label(s);
    if label.is_empty() {
        Err("vertex label must not be empty".to_string())
    } else {
        Ok(label)
    }
}

/// Parse edge weight from string
pub fn parse_weight(s: &str) -> std::result::Result<Weight, String> {
    s.parse::<Weight>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse duplicate edge policy from string
pub fn parse_duplicate_policy(s: &str) -> std::result::Result<DuplicateEdgePolicy, String> {
    s.parse::<DuplicateEdgePolicy>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weighted_edge() {
        let edge = parse_edge_spec("n-m:1").unwrap();
        assert_eq!(edge.from, "N");
        assert_eq!(edge.to, "M");
        assert_eq!(edge.weight, Some(Weight::from(1)));
    }

    #[test]
    fn test_parse_unweighted_edge() {
        let edge = parse_edge_spec("A-B").unwrap();
        assert_eq!(edge.to_tuple(), ("A".to_string(), "B".to_string(), None));
    }

    #[test]
    fn test_parse_fractional_weight() {
        let edge = parse_edge_spec("A-B:2.5").unwrap();
        assert_eq!(edge.weight.unwrap().value(), 2.5);
    }

    #[test]
    fn test_parse_edge_errors() {
        assert!(parse_edge_spec("AB").is_err());
        assert!(parse_edge_spec("A-:3").is_err());
        assert!(parse_edge_spec("A-B:x").is_err());
        assert!(parse_edge_spec("A-B:-2").is_err());
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label(" a ").unwrap(), "A");
        assert!(parse_label("  ").is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn test_parse_duplicate_policy() {
        assert_eq!(
            parse_duplicate_policy("Overwrite").unwrap(),
            DuplicateEdgePolicy::Overwrite
        );
        assert!(parse_duplicate_policy("merge").is_err());
    }
}
