//! Common flag groups used across CLI modules
//!
//! Paired boolean flags are declared as single-choice clap groups so that
//! passing both halves is a usage error raised by the parser, and both map
//! to a [`Toggle`].

use clap::Args;
use nimbus_core::Toggle;

/// `--enable` / `--disable`
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct AdminStateFlags {
    /// Enable the resource
    #[arg(long)]
    pub enable: bool,

    /// Disable the resource
    #[arg(long)]
    pub disable: bool,
}

impl AdminStateFlags {
    pub fn toggle(&self) -> Toggle {
        Toggle::from_flags(self.enable, self.disable)
    }
}

/// `--share` / `--no-share`
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct ShareFlags {
    /// Share the network between projects
    #[arg(long)]
    pub share: bool,

    /// Do not share the network between projects
    #[arg(long)]
    pub no_share: bool,
}

impl ShareFlags {
    pub fn toggle(&self) -> Toggle {
        Toggle::from_flags(self.share, self.no_share)
    }
}
