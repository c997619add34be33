use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use syn::LitStr;

/// The `rename_all` conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    CamelCase,
    PascalCase,
    SnakeCase,
    KebabCase,
    ScreamingSnakeCase,
    LowerCase,
    UpperCase,
}

impl RenameRule {
    const ALL: [(&'static str, Self); 7] = [
        ("camelCase", Self::CamelCase),
        ("PascalCase", Self::PascalCase),
        ("snake_case", Self::SnakeCase),
        ("kebab-case", Self::KebabCase),
        ("SCREAMING_SNAKE_CASE", Self::ScreamingSnakeCase),
        ("lowercase", Self::LowerCase),
        ("UPPERCASE", Self::UpperCase),
    ];

    pub fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        let value = lit.value();
        Self::ALL
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rule)| *rule)
            .ok_or_else(|| {
                let expected = Self::ALL.map(|(name, _)| name).join("`, `");
                syn::Error::new(
                    lit.span(),
                    format!("unknown rename rule `{value}`, expected one of `{expected}`"),
                )
            })
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            Self::CamelCase => name.to_lower_camel_case(),
            Self::PascalCase => name.to_upper_camel_case(),
            Self::SnakeCase => name.to_snake_case(),
            Self::KebabCase => name.to_kebab_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
            Self::LowerCase => name.to_lowercase(),
            Self::UpperCase => name.to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenameRule;

    #[test]
    fn rules() {
        assert_eq!(RenameRule::CamelCase.apply("map_of_longs"), "mapOfLongs");
        assert_eq!(RenameRule::PascalCase.apply("event_name"), "EventName");
        assert_eq!(RenameRule::KebabCase.apply("event_name"), "event-name");
        assert_eq!(RenameRule::ScreamingSnakeCase.apply("Red"), "RED");
        assert_eq!(RenameRule::SnakeCase.apply("LightBlue"), "light_blue");
        assert_eq!(RenameRule::LowerCase.apply("Red"), "red");
    }

    #[test]
    fn unknown_rule_lists_choices() {
        let lit = syn::LitStr::new("camel", proc_macro2::Span::call_site());
        let err = RenameRule::from_lit(&lit).unwrap_err().to_string();
        assert!(err.contains("`camelCase`"));
    }
}
