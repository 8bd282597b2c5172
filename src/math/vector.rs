use std::fmt;
use std::path::Path;

use anyhow::Result;
use num_complex::Complex64;
use num_traits::Zero;

use crate::io::{self, FileFormat};

/// Element representation of a [`NumVector`], fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Real,
    Complex,
}

#[derive(Debug)]
enum Buffer<'a, T> {
    Owned(Vec<T>),
    Borrowed(&'a mut [T]),
}

impl<T> Buffer<'_, T> {
    fn as_slice(&self) -> &[T] {
        match self {
            Buffer::Owned(data) => data,
            Buffer::Borrowed(data) => data,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Buffer::Owned(data) => data,
            Buffer::Borrowed(data) => data,
        }
    }

    fn is_owned(&self) -> bool {
        matches!(self, Buffer::Owned(_))
    }
}

#[derive(Debug)]
enum Storage<'a> {
    Real(Buffer<'a, f64>),
    Complex(Buffer<'a, Complex64>),
}

/// Fixed-length vector of doubles stored in either real or complex form.
///
/// The storage is selected once at construction and never changes. Writes
/// of complex values into a real vector keep only the real part; reads of
/// a real vector through [`NumVector::get`] yield a zero imaginary part.
///
/// The backing buffer is either owned by the vector or mutably borrowed
/// from the caller. A borrowed vector never frees the caller's buffer and
/// cannot outlive it; copies made with [`NumVector::to_owned`] always own
/// their storage.
#[derive(Debug)]
pub struct NumVector<'a> {
    storage: Storage<'a>,
}

impl NumVector<'static> {
    /// Zero-filled vector of the given length and kind, owning its storage.
    pub fn zeros(len: usize, kind: Kind) -> Self {
        match kind {
            Kind::Real => Self::from_real_vec(vec![0.0; len]),
            Kind::Complex => Self::from_complex_vec(vec![Complex64::zero(); len]),
        }
    }

    pub fn from_real_vec(data: Vec<f64>) -> Self {
        Self {
            storage: Storage::Real(Buffer::Owned(data)),
        }
    }

    pub fn from_complex_vec(data: Vec<Complex64>) -> Self {
        Self {
            storage: Storage::Complex(Buffer::Owned(data)),
        }
    }

    /// Read a vector from a file, auto-resolving the format when asked.
    ///
    /// Decode failures (missing file, malformed contents) are recoverable
    /// errors; an unrecognized extension under [`FileFormat::Auto`] is a
    /// caller contract violation and panics.
    pub fn from_file(path: impl AsRef<Path>, format: FileFormat) -> Result<Self> {
        io::read_vector(path, format)
    }

    /// Like [`NumVector::from_file`], with a directive string applied on
    /// the text path (e.g. `"--nrow 5"`).
    pub fn from_file_with_options(
        path: impl AsRef<Path>,
        format: FileFormat,
        options: &str,
    ) -> Result<Self> {
        io::read_vector_with_options(path, format, options)
    }
}

impl<'a> NumVector<'a> {
    /// Vector aliasing a caller-supplied real buffer. Mutations go through
    /// to the buffer; the vector never frees it.
    pub fn from_real_slice_mut(data: &'a mut [f64]) -> Self {
        Self {
            storage: Storage::Real(Buffer::Borrowed(data)),
        }
    }

    /// Vector aliasing a caller-supplied complex buffer.
    pub fn from_complex_slice_mut(data: &'a mut [Complex64]) -> Self {
        Self {
            storage: Storage::Complex(Buffer::Borrowed(data)),
        }
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Real(buffer) => buffer.as_slice().len(),
            Storage::Complex(buffer) => buffer.as_slice().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> Kind {
        match &self.storage {
            Storage::Real(_) => Kind::Real,
            Storage::Complex(_) => Kind::Complex,
        }
    }

    pub fn owns_storage(&self) -> bool {
        match &self.storage {
            Storage::Real(buffer) => buffer.is_owned(),
            Storage::Complex(buffer) => buffer.is_owned(),
        }
    }

    /// Copy of this vector with freshly allocated, owned storage.
    pub fn to_owned(&self) -> NumVector<'static> {
        match &self.storage {
            Storage::Real(buffer) => NumVector::from_real_vec(buffer.as_slice().to_vec()),
            Storage::Complex(buffer) => NumVector::from_complex_vec(buffer.as_slice().to_vec()),
        }
    }

    /// Element at `index` as a complex value; real vectors yield a zero
    /// imaginary part.
    pub fn get(&self, index: usize) -> Complex64 {
        match &self.storage {
            Storage::Real(buffer) => Complex64::new(buffer.as_slice()[index], 0.0),
            Storage::Complex(buffer) => buffer.as_slice()[index],
        }
    }

    /// Real part of the element at `index`; the imaginary part of a
    /// complex element is discarded.
    pub fn get_real(&self, index: usize) -> f64 {
        match &self.storage {
            Storage::Real(buffer) => buffer.as_slice()[index],
            Storage::Complex(buffer) => buffer.as_slice()[index].re,
        }
    }

    /// Overwrite the element at `index`. Writing a complex value into a
    /// real vector keeps only the real part.
    pub fn set(&mut self, index: usize, value: impl Into<Complex64>) {
        let value = value.into();
        match &mut self.storage {
            Storage::Real(buffer) => buffer.as_mut_slice()[index] = value.re,
            Storage::Complex(buffer) => buffer.as_mut_slice()[index] = value,
        }
    }

    /// Add to the element at `index`, with the same narrowing rule as
    /// [`NumVector::set`].
    pub fn add(&mut self, index: usize, value: impl Into<Complex64>) {
        let value = value.into();
        match &mut self.storage {
            Storage::Real(buffer) => buffer.as_mut_slice()[index] += value.re,
            Storage::Complex(buffer) => buffer.as_mut_slice()[index] += value,
        }
    }

    /// Multiply every element in place. A complex factor applied to a real
    /// vector uses only its real part.
    pub fn scale(&mut self, factor: impl Into<Complex64>) {
        let factor = factor.into();
        match &mut self.storage {
            Storage::Real(buffer) => {
                for value in buffer.as_mut_slice() {
                    *value *= factor.re;
                }
            }
            Storage::Complex(buffer) => {
                for value in buffer.as_mut_slice() {
                    *value *= factor;
                }
            }
        }
    }

    /// Overwrite every element with the additive identity of the kind.
    pub fn zero(&mut self) {
        match &mut self.storage {
            Storage::Real(buffer) => buffer.as_mut_slice().fill(0.0),
            Storage::Complex(buffer) => buffer.as_mut_slice().fill(Complex64::zero()),
        }
    }

    /// Copy all elements from `source`. A length or kind mismatch is a
    /// caller logic error recoverable at the call site: it is reported as
    /// a warning and the target is left unchanged.
    pub fn copy_from(&mut self, source: &NumVector<'_>) {
        if source.len() != self.len() || source.kind() != self.kind() {
            log::warn!(
                "vector properties mismatch (copy skipped): source is {:?} of length {}, target is {:?} of length {}",
                source.kind(),
                source.len(),
                self.kind(),
                self.len()
            );
            return;
        }
        match (&mut self.storage, &source.storage) {
            (Storage::Real(target), Storage::Real(src)) => {
                target.as_mut_slice().copy_from_slice(src.as_slice());
            }
            (Storage::Complex(target), Storage::Complex(src)) => {
                target.as_mut_slice().copy_from_slice(src.as_slice());
            }
            _ => unreachable!("kind equality already checked"),
        }
    }

    pub fn as_real_slice(&self) -> Option<&[f64]> {
        match &self.storage {
            Storage::Real(buffer) => Some(buffer.as_slice()),
            Storage::Complex(_) => None,
        }
    }

    pub fn as_complex_slice(&self) -> Option<&[Complex64]> {
        match &self.storage {
            Storage::Real(_) => None,
            Storage::Complex(buffer) => Some(buffer.as_slice()),
        }
    }

    pub fn as_real_slice_mut(&mut self) -> Option<&mut [f64]> {
        match &mut self.storage {
            Storage::Real(buffer) => Some(buffer.as_mut_slice()),
            Storage::Complex(_) => None,
        }
    }

    pub fn as_complex_slice_mut(&mut self) -> Option<&mut [Complex64]> {
        match &mut self.storage {
            Storage::Real(_) => None,
            Storage::Complex(buffer) => Some(buffer.as_mut_slice()),
        }
    }
}

/// Equal when kind and elements match; ownership is not compared.
impl PartialEq for NumVector<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Storage::Real(a), Storage::Real(b)) => a.as_slice() == b.as_slice(),
            (Storage::Complex(a), Storage::Complex(b)) => a.as_slice() == b.as_slice(),
            _ => false,
        }
    }
}

impl fmt::Display for NumVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for index in 0..self.len() {
            match &self.storage {
                Storage::Real(buffer) => write!(f, "{}", buffer.as_slice()[index])?,
                Storage::Complex(buffer) => write!(f, "{}", buffer.as_slice()[index])?,
            }
            if index + 1 != self.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Real vector of `count` points in uniform arithmetic progression from
/// `min` to `max` inclusive. `count == 1` yields `[min]`.
///
/// Panics if `count` is zero.
pub fn linspace(min: f64, max: f64, count: usize) -> NumVector<'static> {
    assert!(count >= 1, "linspace requires at least one point");
    if count == 1 {
        return NumVector::from_real_vec(vec![min]);
    }
    let step = (max - min) / (count as f64 - 1.0);
    let data = (0..count).map(|i| min + i as f64 * step).collect();
    NumVector::from_real_vec(data)
}

/// Real vector of `count` points in uniform geometric progression from
/// `min` to `max` inclusive. `count == 1` yields `[min]`.
///
/// Panics if `count` is zero or `min` is zero.
pub fn logspace(min: f64, max: f64, count: usize) -> NumVector<'static> {
    assert!(count >= 1, "logspace requires at least one point");
    assert!(min != 0.0, "logspace requires a nonzero minimum");
    if count == 1 {
        return NumVector::from_real_vec(vec![min]);
    }
    let ratio = (max / min).powf(1.0 / (count as f64 - 1.0));
    let data = (0..count).map(|i| min * ratio.powi(i as i32)).collect();
    NumVector::from_real_vec(data)
}

/// Concatenate two optional vectors, `a`'s elements first.
///
/// Returns `None` only when both inputs are `None`; a single present input
/// is returned as an owned copy. The result is real only when both inputs
/// are real.
pub fn concat(
    a: Option<&NumVector<'_>>,
    b: Option<&NumVector<'_>>,
) -> Option<NumVector<'static>> {
    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(a.to_owned()),
        (None, Some(b)) => Some(b.to_owned()),
        (Some(a), Some(b)) => {
            let kind = if a.kind() == Kind::Real && b.kind() == Kind::Real {
                Kind::Real
            } else {
                Kind::Complex
            };
            let mut joined = NumVector::zeros(a.len() + b.len(), kind);
            for i in 0..a.len() {
                joined.set(i, a.get(i));
            }
            for i in 0..b.len() {
                joined.set(a.len() + i, b.get(i));
            }
            Some(joined)
        }
    }
}
