use cardsift_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/cardsift/config.json` and
/// seeds a sample roster next to it.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        Config::create_config()
    }
}
