//! AudioSet record codec
//!
//! A record is a 12-byte header followed by the i16 sample block and the
//! packed label block. [`Codec::decode`] reads exactly one record from any
//! [`Read`]; [`Codec::encode`] writes exactly one record to any [`Write`].
//! Opening, compressing or fetching the underlying bytes is up to the
//! caller (see [`crate::AudioSetFile`]).

use audioset_core::{
    constants::SAMPLE_SIZE, first_invalid_label,
    packing::{pack_matrix, unpack_matrix},
    quantize::{dequantize_into, quantize_all},
    samples, validate_matrix_len, AudioSetHeader, DenseMatrix, LabelElement, SampleElement,
    ScaleMode,
};
use std::io::{Read, Write};

use crate::{Error, Labels, Matrix, Result, Waveform};

/// Samples read per `read_exact` call while decoding
///
/// Buffers grow as data actually arrives, so a header that declares a huge
/// record cannot force a huge allocation up front.
const READ_CHUNK_SAMPLES: usize = 1 << 20;

/// Label bytes read per `read_exact` call while decoding
const READ_CHUNK_BYTES: usize = 1 << 20;

/// Configuration for encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// How waveform amplitudes are scaled before quantization
    pub scale_mode: ScaleMode,
    /// Reject labels other than 0 and 1 instead of packing their low bit
    pub validate_labels: bool,
}

impl CodecConfig {
    /// Set the amplitude scaling mode
    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    /// Enable or disable label value validation
    pub fn with_label_validation(mut self, validate_labels: bool) -> Self {
        self.validate_labels = validate_labels;
        self
    }

    /// Parse a configuration from JSON, e.g. `{"scale_mode": "raw"}`
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            scale_mode: ScaleMode::Auto,
            validate_labels: true,
        }
    }
}

/// Stateless encoder/decoder for AudioSet records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get the codec configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Read and validate only the 12-byte header
    pub fn decode_header<R: Read + ?Sized>(&self, reader: &mut R) -> Result<AudioSetHeader> {
        let mut bytes = [0u8; AudioSetHeader::SIZE];
        reader.read_exact(&mut bytes)?;
        Ok(AudioSetHeader::from_bytes(&bytes)?)
    }

    /// Decode one record into waveforms and labels
    ///
    /// Consumes exactly the bytes of one record. Fails with
    /// `TruncatedInput` if the source ends early and `MalformedHeader` if
    /// the header has negative counts or no label classes.
    pub fn decode<R: Read + ?Sized>(&self, reader: &mut R) -> Result<(Waveform, Labels)> {
        let header = self.decode_header(reader)?;
        self.decode_body(reader, &header)
    }

    /// Decode the sample and label blocks following an already parsed header
    pub fn decode_body<R: Read + ?Sized>(
        &self,
        reader: &mut R,
        header: &AudioSetHeader,
    ) -> Result<(Waveform, Labels)> {
        header.validate()?;
        let nclips = header.nclips();

        let sample_count = header.sample_block_size()? / SAMPLE_SIZE;
        let mut stored: Vec<i16> = Vec::with_capacity(sample_count.min(READ_CHUNK_SAMPLES));
        while stored.len() < sample_count {
            let start = stored.len();
            let n = (sample_count - start).min(READ_CHUNK_SAMPLES);
            stored.resize(start + n, 0);
            reader.read_exact(samples::as_bytes_mut(&mut stored[start..]))?;
        }
        samples::from_le_in_place(&mut stored);

        let label_bytes = header.label_block_size()?;
        let mut packed: Vec<u8> = Vec::with_capacity(label_bytes.min(READ_CHUNK_BYTES));
        while packed.len() < label_bytes {
            let start = packed.len();
            let n = (label_bytes - start).min(READ_CHUNK_BYTES);
            packed.resize(start + n, 0);
            reader.read_exact(&mut packed[start..])?;
        }

        let mut amplitudes = vec![0f32; stored.len()];
        dequantize_into(&stored, &mut amplitudes)?;
        let waveform = Matrix::from_vec(nclips, header.nsamples(), amplitudes)?;

        let flags = unpack_matrix(&packed, nclips, header.nlabels())?;
        let labels = Matrix::from_vec(nclips, header.nlabels(), flags)?;

        Ok((waveform, labels))
    }

    /// Encode one record
    ///
    /// All validation, quantization and packing happen before the first
    /// byte is written, so a rejected input leaves the sink untouched. The
    /// waveform is read, never modified.
    pub fn encode<W, S, L>(&self, writer: &mut W, waveform: &S, labels: &L) -> Result<()>
    where
        W: Write + ?Sized,
        S: DenseMatrix + ?Sized,
        S::Element: SampleElement,
        L: DenseMatrix + ?Sized,
        L::Element: LabelElement,
    {
        let (header, mut stored, packed) = self.prepare(waveform, labels)?;

        samples::to_le_in_place(&mut stored);
        writer.write_all(&header.to_bytes_array())?;
        writer.write_all(samples::as_bytes(&stored))?;
        writer.write_all(&packed)?;
        writer.flush()?;

        Ok(())
    }

    /// Encode one record into a new buffer
    pub fn encode_to_vec<S, L>(&self, waveform: &S, labels: &L) -> Result<Vec<u8>>
    where
        S: DenseMatrix + ?Sized,
        S::Element: SampleElement,
        L: DenseMatrix + ?Sized,
        L::Element: LabelElement,
    {
        let mut out = Vec::new();
        self.encode(&mut out, waveform, labels)?;
        Ok(out)
    }

    /// Validate shapes and build the header, quantized samples and packed labels
    fn prepare<S, L>(&self, waveform: &S, labels: &L) -> Result<(AudioSetHeader, Vec<i16>, Vec<u8>)>
    where
        S: DenseMatrix + ?Sized,
        S::Element: SampleElement,
        L: DenseMatrix + ?Sized,
        L::Element: LabelElement,
    {
        let (nclips, nsamples) = waveform.dimensions();
        let (label_rows, nlabels) = labels.dimensions();

        if nclips != label_rows {
            return Err(Error::ShapeMismatch {
                waveform_rows: nclips,
                label_rows,
            });
        }
        validate_matrix_len(waveform.as_slice().len(), nclips, nsamples)?;
        validate_matrix_len(labels.as_slice().len(), label_rows, nlabels)?;

        let header = AudioSetHeader::from_dimensions(nclips, nsamples, nlabels)?;
        header.record_size()?;

        if self.config.validate_labels {
            for row in 0..label_rows {
                let flags = &labels.as_slice()[row * nlabels..(row + 1) * nlabels];
                if let Some(class) = first_invalid_label(flags) {
                    return Err(Error::InvalidLabel { row, class });
                }
            }
        }

        let stored = quantize_all(waveform.as_slice(), self.config.scale_mode)?;
        let packed = pack_matrix(labels.as_slice(), nclips, nlabels)?;

        Ok((header, stored, packed))
    }
}

/// Decode one record with the default codec
pub fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<(Waveform, Labels)> {
    Codec::default().decode(reader)
}

/// Encode one record with the default codec
pub fn encode<W, S, L>(writer: &mut W, waveform: &S, labels: &L) -> Result<()>
where
    W: Write + ?Sized,
    S: DenseMatrix + ?Sized,
    S::Element: SampleElement,
    L: DenseMatrix + ?Sized,
    L::Element: LabelElement,
{
    Codec::default().encode(writer, waveform, labels)
}
