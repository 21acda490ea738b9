//! File I/O for AudioSet record files
//!
//! Paths ending in `.gz` are transparently decompressed on read and
//! compressed on write. Every handle is scoped to the call that opens it.

use audioset_core::{AudioSetHeader, DenseMatrix, LabelElement, SampleElement};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use crate::{Codec, Labels, Result, Waveform};

/// Byte source over a possibly compressed file
pub enum RecordReader {
    Plain(BufReader<File>),
    #[cfg(feature = "gzip")]
    Gzip(flate2::read::GzDecoder<BufReader<File>>),
}

impl Read for RecordReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            RecordReader::Plain(r) => r.read(buf),
            #[cfg(feature = "gzip")]
            RecordReader::Gzip(r) => r.read(buf),
        }
    }
}

/// Byte sink over a possibly compressed file
///
/// Call [`RecordWriter::finish`] to flush buffers and write the gzip
/// trailer; dropping the writer without finishing may lose data.
pub enum RecordWriter {
    Plain(BufWriter<File>),
    #[cfg(feature = "gzip")]
    Gzip(flate2::write::GzEncoder<BufWriter<File>>),
}

impl RecordWriter {
    /// Flush everything to disk and close the stream
    pub fn finish(self) -> io::Result<()> {
        let mut inner = match self {
            RecordWriter::Plain(w) => w,
            #[cfg(feature = "gzip")]
            RecordWriter::Gzip(w) => w.finish()?,
        };
        inner.flush()?;
        inner.get_ref().sync_all()
    }
}

impl Write for RecordWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            RecordWriter::Plain(w) => w.write(buf),
            #[cfg(feature = "gzip")]
            RecordWriter::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            RecordWriter::Plain(w) => w.flush(),
            #[cfg(feature = "gzip")]
            RecordWriter::Gzip(w) => w.flush(),
        }
    }
}

/// File handle for AudioSet record files
#[derive(Debug, Clone)]
pub struct AudioSetFile {
    pub header: AudioSetHeader,
    pub path: PathBuf,
}

impl AudioSetFile {
    /// Open an existing file and read its header
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let header = Self::read_header(path)?;

        Ok(Self {
            header,
            path: path.to_path_buf(),
        })
    }

    /// Whether a path is treated as gzip-compressed
    pub fn is_compressed<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    }

    /// Open a path for reading, decompressing `.gz` files
    pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<RecordReader> {
        let path = path.as_ref();
        let file = BufReader::new(File::open(path)?);

        if Self::is_compressed(path) {
            tracing::debug!(path = %path.display(), "opening gzip record");
            #[cfg(feature = "gzip")]
            return Ok(RecordReader::Gzip(flate2::read::GzDecoder::new(file)));
            #[cfg(not(feature = "gzip"))]
            return Err(gzip_unsupported());
        }

        tracing::debug!(path = %path.display(), "opening record");
        Ok(RecordReader::Plain(file))
    }

    /// Create or truncate a path for writing, compressing `.gz` files
    pub fn create_writer<P: AsRef<Path>>(path: P) -> Result<RecordWriter> {
        let path = path.as_ref();

        if Self::is_compressed(path) {
            #[cfg(feature = "gzip")]
            {
                let file = BufWriter::new(File::create(path)?);
                tracing::debug!(path = %path.display(), "creating gzip record");
                return Ok(RecordWriter::Gzip(flate2::write::GzEncoder::new(
                    file,
                    flate2::Compression::default(),
                )));
            }
            #[cfg(not(feature = "gzip"))]
            return Err(gzip_unsupported());
        }

        let file = BufWriter::new(File::create(path)?);
        tracing::debug!(path = %path.display(), "creating record");
        Ok(RecordWriter::Plain(file))
    }

    /// Read only the header of a file
    pub fn read_header<P: AsRef<Path>>(path: P) -> Result<AudioSetHeader> {
        let mut reader = Self::open_reader(path)?;
        Codec::default().decode_header(&mut reader)
    }

    /// Read a whole record with the default codec
    pub fn read<P: AsRef<Path>>(path: P) -> Result<(Waveform, Labels)> {
        Self::read_with(path, &Codec::default())
    }

    /// Read a whole record
    pub fn read_with<P: AsRef<Path>>(path: P, codec: &Codec) -> Result<(Waveform, Labels)> {
        let mut reader = Self::open_reader(path)?;
        codec.decode(&mut reader)
    }

    /// Write a record with the default codec
    pub fn write<P, S, L>(path: P, waveform: &S, labels: &L) -> Result<()>
    where
        P: AsRef<Path>,
        S: DenseMatrix + ?Sized,
        S::Element: SampleElement,
        L: DenseMatrix + ?Sized,
        L::Element: LabelElement,
    {
        Self::write_with(path, &Codec::default(), waveform, labels)
    }

    /// Write a record
    ///
    /// The record is encoded in memory first, so an input the codec rejects
    /// never creates or truncates the target file.
    pub fn write_with<P, S, L>(path: P, codec: &Codec, waveform: &S, labels: &L) -> Result<()>
    where
        P: AsRef<Path>,
        S: DenseMatrix + ?Sized,
        S::Element: SampleElement,
        L: DenseMatrix + ?Sized,
        L::Element: LabelElement,
    {
        let path = path.as_ref();
        let record = codec.encode_to_vec(waveform, labels)?;

        let mut writer = Self::create_writer(path)?;
        writer.write_all(&record)?;
        writer.finish()?;

        tracing::debug!(
            path = %path.display(),
            bytes = record.len(),
            clips = waveform.nrows(),
            "wrote record"
        );
        Ok(())
    }

    /// Read a whole record through a memory map
    ///
    /// Compressed files cannot be mapped and fall back to [`Self::read_with`].
    /// Bytes left after the record are reported as `TrailingBytes`.
    #[cfg(feature = "mmap")]
    pub fn read_mmap<P: AsRef<Path>>(path: P, codec: &Codec) -> Result<(Waveform, Labels)> {
        let path = path.as_ref();
        if Self::is_compressed(path) {
            return Self::read_with(path, codec);
        }

        let file = File::open(path)?;
        // SAFETY: the map is read-only and dropped before this function
        // returns; concurrent truncation by another process is the only
        // hazard, as with any mmap reader.
        let mmap = unsafe { memmap2::MmapOptions::new().map(&file)? };
        tracing::debug!(path = %path.display(), len = mmap.len(), "mapped record");

        let mut remaining: &[u8] = &mmap;
        let decoded = codec.decode(&mut remaining)?;
        if !remaining.is_empty() {
            return Err(audioset_core::AudioSetError::TrailingBytes.into());
        }

        Ok(decoded)
    }
}

#[cfg(not(feature = "gzip"))]
fn gzip_unsupported() -> crate::Error {
    crate::Error::Io(io::Error::new(
        io::ErrorKind::Unsupported,
        "gzip support is disabled (enable the `gzip` feature)",
    ))
}
