use rpawogen::configtool::*;
use rpawogen::passgen::PasswordOptions;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_options_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"length": 24, "include_uppercase": false, "include_numbers": true, "include_special": true}}"#
        )
        .unwrap();

        let options = load_options(file.path()).unwrap();
        assert_eq!(
            options,
            PasswordOptions {
                length: 24,
                include_uppercase: false,
                include_numbers: true,
                include_special: true,
            }
        );
    }

    #[test]
    fn test_load_options_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_options(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_options_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a json document").unwrap();

        let result = load_options(file.path());
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }
}
