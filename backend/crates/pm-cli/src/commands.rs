use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Build a BCF package and attach it to the project wiki
    Export {
        /// Package name (".bcfzip" is appended when missing)
        #[arg(short, long)]
        name: String,

        /// Email of the user performing the export
        #[arg(short, long)]
        author: String,

        /// Issue ids to export, in order (default: every issue in the dataset)
        #[arg(short, long = "issue")]
        issues: Vec<i64>,

        /// Leave the dataset file untouched; newly allocated GUIDs are discarded
        #[arg(long)]
        no_write_back: bool,
    },

    /// List BCF topics of a project
    Topics {
        #[arg(short, long)]
        project: i64,

        /// Only issues of this type
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,

        /// Leave the dataset file untouched; newly allocated GUIDs are discarded
        #[arg(long)]
        no_write_back: bool,
    },

    /// List projects
    Projects,
}
