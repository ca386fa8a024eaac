/// Parsed command-line flags, pre-filled with the tool's defaults.
#[derive(Debug, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub debug: bool,
    pub no_specials: bool,
    pub length: usize,
    pub count: usize,
}

impl Default for CliFlags {
    fn default() -> Self {
        Self {
            help: false,
            version: false,
            debug: false,
            no_specials: false,
            length: 8,
            count: 1,
        }
    }
}
