use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        let mut add = |name: &str, short: &str, long: &str, description: &str, takes_value| {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        };

        add("help", "-h", "--help", "Print this help message", false);
        add("version", "-v", "--version", "Show version information", false);
        add(
            "history",
            "-H",
            "--history",
            "Use the given file for command history",
            true,
        );
        add("quiet", "-q", "--quiet", "Suppress informational notices", false);
        add("debug", "-d", "--debug", "Enable debug logging", false);

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                match args.get(i + 1) {
                    Some(value) => {
                        flag.value = Some(value.clone());
                        i += 1;
                    }
                    None => {
                        return Err(ShellError::FlagError(format!(
                            "Flag {} requires a value",
                            arg
                        )));
                    }
                }
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: kshell [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_switches() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--debug"])).unwrap();

        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_parse_history_value() {
        let mut flags = Flags::new();
        flags
            .parse(&args(&["--history", "/tmp/kshell_test_history"]))
            .unwrap();

        assert_eq!(
            flags.get_value("history").map(String::as_str),
            Some("/tmp/kshell_test_history")
        );
    }

    #[test]
    fn test_missing_value() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["-H"])),
            Err(ShellError::FlagError(_))
        ));
    }

    #[test]
    fn test_unknown_flag() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["--bogus"])),
            Err(ShellError::FlagError(_))
        ));
    }
}
