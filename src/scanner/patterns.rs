//! Declaration extraction from headers
//!
//! Three independent regex scans pull class, interface and component
//! names out of header text. This is syntactic matching, not parsing:
//! `class` is not anchored to a word boundary, only a single public base is
//! captured, and matches inside comments or strings are kept. Names are
//! never deduplicated.

use crate::models::SymbolRecord;
use regex::Regex;
use std::sync::OnceLock;

static CLASS_PATTERN: OnceLock<Regex> = OnceLock::new();
static INTERFACE_PATTERN: OnceLock<Regex> = OnceLock::new();
static COMPONENT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn class_pattern() -> &'static Regex {
    CLASS_PATTERN.get_or_init(|| {
        Regex::new(r"class\s+(?:ACF_\w+_EXPORT\s+)?(\w+)(?:\s*:\s*public\s+(\w+))?")
            .expect("valid regex")
    })
}

fn interface_pattern() -> &'static Regex {
    INTERFACE_PATTERN.get_or_init(|| {
        Regex::new(r"class\s+(?:ACF_\w+_EXPORT\s+)?(I[A-Z]\w+)").expect("valid regex")
    })
}

fn component_pattern() -> &'static Regex {
    COMPONENT_PATTERN.get_or_init(|| {
        Regex::new(r"I_BEGIN_COMPONENT\s*\(\s*(\w+)\s*\)").expect("valid regex")
    })
}

/// Everything extracted from one header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSymbols {
    pub classes: Vec<SymbolRecord>,
    pub interfaces: Vec<SymbolRecord>,
    pub components: Vec<SymbolRecord>,
}

pub fn extract_classes(content: &str, file: &str) -> Vec<SymbolRecord> {
    class_pattern()
        .captures_iter(content)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let base = caps.get(2).map(|m| m.as_str().to_string());
            Some(SymbolRecord::new(name, file).with_base(base))
        })
        .collect()
}

/// Classes following the `I<Upper>...` naming convention
pub fn extract_interfaces(content: &str, file: &str) -> Vec<SymbolRecord> {
    interface_pattern()
        .captures_iter(content)
        .filter_map(|caps| Some(SymbolRecord::new(caps.get(1)?.as_str(), file)))
        .collect()
}

/// Arguments of `I_BEGIN_COMPONENT(...)` declarations
pub fn extract_components(content: &str, file: &str) -> Vec<SymbolRecord> {
    component_pattern()
        .captures_iter(content)
        .filter_map(|caps| Some(SymbolRecord::new(caps.get(1)?.as_str(), file)))
        .collect()
}

pub fn extract_all(content: &str, file: &str) -> HeaderSymbols {
    HeaderSymbols {
        classes: extract_classes(content, file),
        interfaces: extract_interfaces(content, file),
        components: extract_components(content, file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
#pragma once

namespace iser
{

class ACF_ISER_EXPORT CArchiveBase: public IArchive
{
};

class IArchive: virtual public istd::IPolymorphic
{
};

class CMemoryReadArchive : public CArchiveBase, public IVersionInfo
{
public:
    I_BEGIN_COMPONENT( CMemoryReadArchive );
    I_END_COMPONENT;
};

class Ifoo;

}
"#;

    #[test]
    fn test_extracts_classes_with_single_public_base() {
        let classes = extract_classes(HEADER, "Include/iser/CArchiveBase.h");
        let summary: Vec<_> = classes
            .iter()
            .map(|c| (c.name.as_str(), c.base.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("CArchiveBase", Some("IArchive")),
                ("IArchive", None),
                ("CMemoryReadArchive", Some("CArchiveBase")),
                ("Ifoo", None),
            ]
        );
        assert!(classes.iter().all(|c| c.file == "Include/iser/CArchiveBase.h"));
    }

    #[test]
    fn test_extracts_interfaces_by_naming_convention() {
        let names: Vec<_> = extract_interfaces(HEADER, "a.h")
            .into_iter()
            .map(|s| s.name)
            .collect();
        // "Ifoo" does not follow the I<Upper> convention
        assert_eq!(names, vec!["IArchive"]);
    }

    #[test]
    fn test_extracts_components() {
        let components = extract_components(HEADER, "a.h");
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "CMemoryReadArchive");
        assert_eq!(components[0].base, None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let content = "class CFoo;\nclass CFoo {};\n";
        assert_eq!(extract_classes(content, "x.h").len(), 2);
    }

    #[test]
    fn test_approximate_matching_is_preserved() {
        // No word boundary before `class`, and comments are not skipped.
        let content = "// subclass Widget is deprecated\n";
        let classes = extract_classes(content, "x.h");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Widget");
    }

    #[test]
    fn test_extract_all_empty_input() {
        assert_eq!(extract_all("", "x.h"), HeaderSymbols::default());
    }
}
