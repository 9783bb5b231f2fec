use structopt::StructOpt;

/// Configuration for the checkpoint subsystem
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Accept blocks that contradict the hardcoded checkpoints
    /// (enforcement is on unless this flag is given)
    #[structopt(long)]
    pub disable_checkpoints: bool
}
