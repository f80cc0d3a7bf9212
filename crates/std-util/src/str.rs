use heck::ToSnakeCase;

/// Splits a member name into lowercase words.
///
/// `companyName`, `company_name` and `CompanyName` all split into
/// `["company", "name"]`.
pub fn words(src: &str) -> Vec<String> {
    snake_case(src)
        .split('_')
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_camel_case() {
        assert_eq!(words("companyName"), ["company", "name"]);
    }

    #[test]
    fn words_from_snake_case() {
        assert_eq!(words("role_name"), ["role", "name"]);
    }

    #[test]
    fn words_keep_acronyms_together() {
        assert_eq!(words("UserDTO"), ["user", "dto"]);
    }

    #[test]
    fn words_skip_empty_parts() {
        assert_eq!(words("__name"), ["name"]);
        assert!(words("").is_empty());
    }
}
