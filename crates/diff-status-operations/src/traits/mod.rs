mod commit_status_writer;
mod pull_request_files;

pub use commit_status_writer::CommitStatusWriter;
pub use pull_request_files::PullRequestFiles;
