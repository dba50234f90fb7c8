//! Writes a package's documents into a scoped temporary directory and zips
//! them.
//!
//! Layout:
//!
//! ```text
//! bcf.version
//! <topic-guid>/markup.bcf
//! <topic-guid>/viewpoint.bcfv   (topic has a viewpoint)
//! <topic-guid>/snapshot.png     (viewpoint has a snapshot)
//! ```
//!
//! The temporary directory is owned by a `TempDir` and removed when the build
//! returns, whether it succeeded or not.

use crate::archive_name::archive_file_name;
use crate::manifest::{MANIFEST_FILE_NAME, render_manifest};
use crate::markup::{MARKUP_FILE_NAME, render_markup};
use crate::visualization::{SNAPSHOT_FILE_NAME, VIEWPOINT_FILE_NAME, render_viewpoint};
use crate::{BcfError, BcfPackage, BcfResult, BcfTopic, Producer};

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use pm_config::{ArchiveCompression, BcfConfig};
use tempfile::TempDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const TEMP_DIR_PREFIX: &str = "bcf-export-";

/// A file written into the working directory, and its name inside the archive.
struct PackageEntry {
    archive_name: String,
    path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PackageBuilder {
    producer: Producer,
    compression: ArchiveCompression,
    temp_root: Option<PathBuf>,
}

impl PackageBuilder {
    pub fn new(producer: Producer) -> Self {
        Self {
            producer,
            compression: ArchiveCompression::default(),
            temp_root: None,
        }
    }

    pub fn from_config(config: &BcfConfig) -> Self {
        Self::new(Producer::from_config(config)).with_compression(config.compression)
    }

    pub fn with_compression(mut self, compression: ArchiveCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Create working directories under `root` instead of the system temp dir.
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    pub fn producer(&self) -> &Producer {
        &self.producer
    }

    pub fn build(&self, file_name: &str, topics: &[BcfTopic]) -> BcfResult<BcfPackage> {
        self.build_at(file_name, topics, Utc::now())
    }

    /// Build with an explicit generation timestamp for the document headers.
    pub fn build_at(
        &self,
        file_name: &str,
        topics: &[BcfTopic],
        generated_at: DateTime<Utc>,
    ) -> BcfResult<BcfPackage> {
        if topics.is_empty() {
            return Err(BcfError::empty_input());
        }
        let archive_name = archive_file_name(file_name)?;
        check_topic_guids(topics)?;

        let workdir = self.create_workdir()?;
        let header = self.producer.header_comment(&generated_at);

        let mut entries = Vec::with_capacity(1 + topics.len() * 3);

        let manifest_path = workdir.path().join(MANIFEST_FILE_NAME);
        write_document(&manifest_path, &render_manifest(&header)?)?;
        entries.push(PackageEntry {
            archive_name: MANIFEST_FILE_NAME.to_string(),
            path: manifest_path,
        });

        for topic in topics {
            write_topic(workdir.path(), topic, &header, &mut entries)?;
        }

        let bytes = assemble_archive(&entries, self.compression)?;

        info!(
            "Built BCF package {} ({} topics, {} entries, {} bytes)",
            archive_name,
            topics.len(),
            entries.len(),
            bytes.len()
        );

        let workdir_path = workdir.path().to_path_buf();
        if let Err(e) = workdir.close() {
            warn!(
                "Failed to remove BCF working directory {}: {}",
                workdir_path.display(),
                e
            );
        }

        Ok(BcfPackage {
            file_name: archive_name,
            bytes,
            entries: entries.into_iter().map(|e| e.archive_name).collect(),
        })
    }

    fn create_workdir(&self) -> BcfResult<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_DIR_PREFIX);

        let result = match &self.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        };
        result.map_err(|e| BcfError::io("allocating temporary directory", e))
    }
}

/// GUIDs become directory names, so they must be unique single path components
/// that do not shadow the manifest.
fn check_topic_guids(topics: &[BcfTopic]) -> BcfResult<()> {
    let mut seen = HashSet::with_capacity(topics.len());
    for topic in topics {
        let guid = topic.guid.as_str();
        if guid.trim().is_empty()
            || guid == "."
            || guid == ".."
            || guid == MANIFEST_FILE_NAME
            || guid.contains(['/', '\\'])
        {
            return Err(BcfError::invalid_guid(guid));
        }
        if !seen.insert(guid) {
            return Err(BcfError::duplicate_topic(guid));
        }
    }
    Ok(())
}

fn write_topic(
    root: &Path,
    topic: &BcfTopic,
    header: &str,
    entries: &mut Vec<PackageEntry>,
) -> BcfResult<()> {
    debug!(
        "Writing topic {} for issue {} (index {:?})",
        topic.guid, topic.issue.id, topic.index
    );

    let topic_dir = root.join(&topic.guid);
    fs::create_dir(&topic_dir)
        .map_err(|e| BcfError::io(format!("creating topic directory {}", topic.guid), e))?;

    let mut push = |file_name: &str, path: PathBuf| {
        entries.push(PackageEntry {
            archive_name: format!("{}/{}", topic.guid, file_name),
            path,
        });
    };

    let markup_path = topic_dir.join(MARKUP_FILE_NAME);
    write_document(&markup_path, &render_markup(topic, header)?)?;
    push(MARKUP_FILE_NAME, markup_path);

    let Some(viewpoint) = &topic.issue.viewpoint else {
        return Ok(());
    };

    viewpoint
        .camera
        .validate()
        .map_err(|source| BcfError::Viewpoint {
            guid: topic.guid.clone(),
            source,
        })?;

    let viewpoint_path = topic_dir.join(VIEWPOINT_FILE_NAME);
    write_document(&viewpoint_path, &render_viewpoint(viewpoint, header)?)?;
    push(VIEWPOINT_FILE_NAME, viewpoint_path);

    if let Some(snapshot) = &viewpoint.snapshot {
        let snapshot_path = topic_dir.join(SNAPSHOT_FILE_NAME);
        fs::copy(snapshot, &snapshot_path).map_err(|e| {
            BcfError::io(format!("copying snapshot {}", snapshot.display()), e)
        })?;
        push(SNAPSHOT_FILE_NAME, snapshot_path);
    }

    Ok(())
}

fn write_document(path: &Path, contents: &str) -> BcfResult<()> {
    fs::write(path, contents).map_err(|e| BcfError::io(format!("writing {}", path.display()), e))
}

/// Zip the entries in memory, so topic directories never collide with the archive.
fn assemble_archive(
    entries: &[PackageEntry],
    compression: ArchiveCompression,
) -> BcfResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(compression_method(compression));

    for entry in entries {
        zip.start_file(entry.archive_name.as_str(), options)
            .map_err(|e| BcfError::io_other(format!("adding {}", entry.archive_name), e))?;

        let mut source = File::open(&entry.path)
            .map_err(|e| BcfError::io(format!("opening {}", entry.path.display()), e))?;
        io::copy(&mut source, &mut zip)
            .map_err(|e| BcfError::io(format!("archiving {}", entry.archive_name), e))?;
    }

    let archive = zip
        .finish()
        .map_err(|e| BcfError::io_other("finishing archive", e))?;

    Ok(archive.into_inner())
}

fn compression_method(compression: ArchiveCompression) -> CompressionMethod {
    match compression {
        ArchiveCompression::Deflated => CompressionMethod::Deflated,
        ArchiveCompression::Stored => CompressionMethod::Stored,
    }
}
