/// Stores are for loading/storing different kinds of data.
///
/// Currently, all stores are just simple files, CSV for tabular data and
/// JSON for session snapshots.
///
/// Example store backends:
/// * Files (e.g. CSV).
/// * Remote (e.g. REST).
/// * Databases.
/// * Etc.
pub mod catalog;
pub mod csv;
pub mod ledger;
pub mod snapshot;
