use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RosterConfig {
    /// Overrides the default roster location (`~/cardsift/cards.json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShellConfig {
    /// Prompt shown before each search input line.
    #[serde(default = "ShellConfig::default_prompt")]
    pub prompt: String,

    /// Whether to print a "n of m cards" status line after each pass.
    #[serde(default = "ShellConfig::default_show_counts")]
    pub show_counts: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: Self::default_prompt(),
            show_counts: Self::default_show_counts(),
        }
    }
}

impl ShellConfig {
    fn default_prompt() -> String {
        "search> ".to_string()
    }

    const fn default_show_counts() -> bool {
        true
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "roster": {
    "path": null
  },
  "shell": {
    "prompt": "search> ",
    "show_counts": true
  }
}"#;

const SAMPLE_ROSTER: &str = r#"[
  {
    "name": "Pizza Palace",
    "location": "New York, NY",
    "description": "Coal-oven pies since 1962."
  },
  {
    "name": "Sushi Spot",
    "location": "Boston, MA",
    "description": "Eight-seat omakase counter."
  },
  {
    "name": "Taco Garage",
    "location": "Austin, TX",
    "description": "Brisket tacos out of a converted repair shop."
  },
  {
    "name": "Bluebird Diner",
    "location": "Iowa City, IA"
  },
  {
    "name": "Golden Wok",
    "location": "San Francisco, CA",
    "description": "Late-night dim sum cart service."
  }
]"#;

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("cardsift");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'cardsift init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("loaded config from {}", config_path.display());

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("cardsift");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Resolve the roster file location: the configured override, or
    /// `~/cardsift/cards.json`.
    pub fn roster_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.roster.path {
            return Ok(path.clone());
        }

        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("cardsift")
            .join("cards.json"))
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        // Seed a roster so the shell works out of the box, but never
        // clobber one the user already has.
        let roster_path = config_dir.join("cards.json");
        if !roster_path.exists() {
            std::fs::write(&roster_path, SAMPLE_ROSTER)?;
            println!("✅ Created sample roster at: {}", roster_path.display());
        }

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the roster and add your own cards (name, location, description)");
        println!("   2. Run 'cardsift shell' to search interactively");
        println!("   3. Or run 'cardsift filter -q \"pizza\"' for a one-shot query");
        println!();
        println!("🔧 Configuration options:");
        println!("   - roster.path: use a roster file outside ~/cardsift");
        println!("   - shell.prompt: the interactive prompt text");
        println!("   - shell.show_counts: print 'n of m cards' after each search");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        #[expect(clippy::expect_used, reason = "test: empty config must deserialize")]
        let config: Config = serde_json::from_str("{}").expect("empty config must deserialize");
        assert!(config.roster.path.is_none());
        assert_eq!(config.shell.prompt, "search> ");
        assert!(config.shell.show_counts);
    }

    #[test]
    fn template_is_a_valid_config() {
        #[expect(clippy::expect_used, reason = "test: shipped template must deserialize")]
        let config: Config =
            serde_json::from_str(CONFIG_TEMPLATE).expect("shipped template must deserialize");
        assert!(config.roster.path.is_none());
        assert!(config.shell.show_counts);
    }

    #[test]
    fn sample_roster_is_loadable() {
        #[expect(clippy::expect_used, reason = "test: shipped roster must deserialize")]
        let records: Vec<cardsift_core::CardRecord> =
            serde_json::from_str(SAMPLE_ROSTER).expect("shipped roster must deserialize");
        assert!(!records.is_empty());
        assert!(records.iter().all(|record| !record.name.is_empty()));
    }

    #[test]
    fn explicit_roster_path_wins() {
        let json = r#"{"roster": {"path": "/tmp/other-cards.json"}}"#;
        #[expect(clippy::expect_used, reason = "test: config with path must deserialize")]
        let config: Config =
            serde_json::from_str(json).expect("config with path must deserialize");
        #[expect(clippy::expect_used, reason = "test: resolution cannot fail with override")]
        let resolved = config.roster_path().expect("resolution cannot fail with override");
        assert_eq!(resolved, PathBuf::from("/tmp/other-cards.json"));
    }
}
