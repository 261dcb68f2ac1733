//! Owning and borrowing point encodings.
//!
//! Both variants expose their big-endian coordinate bytes through [`G1Coordinates`] or
//! [`G2Coordinates`]; all arithmetic decodes through those traits, so owning points and views
//! over caller buffers are interchangeable. Constructors only check lengths. Canonicity, the
//! curve equation and G2 subgroup membership are checked when a point is decoded.
use super::{
    constants::{FQ2_LEN, FQ_LEN, G1_LEN, G2_LEN},
    curve::{G1Affine, G2Affine},
    fp::Fp,
    fp2::Fp2,
};
use crate::{
    interface::{CryptoError, CryptoResult},
    utilities::fixed,
};

/// Coordinate access and validation for a G1 point encoding.
pub trait G1Coordinates {
    /// Big-endian x coordinate.
    fn x_bytes(&self) -> &[u8; FQ_LEN];

    /// Big-endian y coordinate.
    fn y_bytes(&self) -> &[u8; FQ_LEN];

    /// Returns `true` if both coordinates are zero, the identity encoding.
    fn is_identity(&self) -> bool {
        self.x_bytes().iter().chain(self.y_bytes()).all(|b| *b == 0)
    }

    /// Decodes into an affine point.
    ///
    /// Fails with [`CryptoError::InvalidPoint`] if a coordinate is not below the field modulus or
    /// the point is not on the curve.
    fn to_affine(&self) -> CryptoResult<G1Affine> {
        let x = read_fq(self.x_bytes())?;
        let y = read_fq(self.y_bytes())?;
        G1Affine::new(x, y).ok_or_else(|| {
            tracing::debug!("g1 point is not on curve");
            CryptoError::InvalidPoint
        })
    }

    /// Concatenated `x || y` encoding.
    fn to_bytes(&self) -> [u8; G1_LEN] {
        let mut out = [0u8; G1_LEN];
        out[..FQ_LEN].copy_from_slice(self.x_bytes());
        out[FQ_LEN..].copy_from_slice(self.y_bytes());
        out
    }
}

/// Coordinate access and validation for a G2 point encoding.
///
/// Each coordinate is an `Fp2` element serialized imaginary part first.
pub trait G2Coordinates {
    /// Big-endian x coordinate, `x.c1 || x.c0`.
    fn x_bytes(&self) -> &[u8; FQ2_LEN];

    /// Big-endian y coordinate, `y.c1 || y.c0`.
    fn y_bytes(&self) -> &[u8; FQ2_LEN];

    /// Returns `true` if all coordinates are zero, the identity encoding.
    fn is_identity(&self) -> bool {
        self.x_bytes().iter().chain(self.y_bytes()).all(|b| *b == 0)
    }

    /// Decodes into an affine point.
    ///
    /// Fails with [`CryptoError::InvalidPoint`] if a component is not below the field modulus,
    /// the point is not on the twist, or it is outside the order `r` subgroup.
    fn to_affine(&self) -> CryptoResult<G2Affine> {
        let x = read_fq2(self.x_bytes())?;
        let y = read_fq2(self.y_bytes())?;
        let Some(point) = G2Affine::new(x, y) else {
            tracing::debug!("g2 point is not on curve");
            return Err(CryptoError::InvalidPoint);
        };
        if !point.is_identity() && !point.is_in_subgroup() {
            tracing::debug!("g2 point is not in the r-torsion subgroup");
            return Err(CryptoError::InvalidPoint);
        }
        Ok(point)
    }

    /// Concatenated `x || y` encoding.
    fn to_bytes(&self) -> [u8; G2_LEN] {
        let mut out = [0u8; G2_LEN];
        out[..FQ2_LEN].copy_from_slice(self.x_bytes());
        out[FQ2_LEN..].copy_from_slice(self.y_bytes());
        out
    }
}

#[inline]
fn read_fq(bytes: &[u8; FQ_LEN]) -> CryptoResult<Fp> {
    Fp::from_be_bytes(bytes).ok_or_else(|| {
        tracing::debug!("coordinate is not below the field modulus");
        CryptoError::InvalidPoint
    })
}

#[inline]
fn read_fq2(bytes: &[u8; FQ2_LEN]) -> CryptoResult<Fp2> {
    Fp2::from_be_bytes(bytes).ok_or_else(|| {
        tracing::debug!("fp2 coordinate is not below the field modulus");
        CryptoError::InvalidPoint
    })
}

/// Owning G1 point encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G1Point {
    x: [u8; FQ_LEN],
    y: [u8; FQ_LEN],
}

impl G1Point {
    /// Point at infinity, `(0, 0)`.
    pub const IDENTITY: Self = Self {
        x: [0; FQ_LEN],
        y: [0; FQ_LEN],
    };

    /// Copies separate coordinates, each exactly 32 bytes.
    pub fn new(x: &[u8], y: &[u8]) -> CryptoResult<Self> {
        Ok(Self {
            x: *fixed::<FQ_LEN>(x)?,
            y: *fixed::<FQ_LEN>(y)?,
        })
    }

    /// Copies a 64-byte `x || y` encoding.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes = fixed::<G1_LEN>(bytes)?;
        let (x, y) = bytes.split_at(FQ_LEN);
        Self::new(x, y)
    }

    /// Encodes an affine point.
    pub fn from_affine(point: &G1Affine) -> Self {
        Self {
            x: point.x().to_be_bytes(),
            y: point.y().to_be_bytes(),
        }
    }

    /// Borrowing view over this point.
    pub fn as_view(&self) -> G1PointView<'_> {
        G1PointView::from(self)
    }
}

impl From<G1Affine> for G1Point {
    fn from(point: G1Affine) -> Self {
        Self::from_affine(&point)
    }
}

impl G1Coordinates for G1Point {
    fn x_bytes(&self) -> &[u8; FQ_LEN] {
        &self.x
    }

    fn y_bytes(&self) -> &[u8; FQ_LEN] {
        &self.y
    }
}

/// G1 point encoding borrowed from caller buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct G1PointView<'a> {
    x: &'a [u8; FQ_LEN],
    y: &'a [u8; FQ_LEN],
}

impl<'a> G1PointView<'a> {
    /// Borrows separate coordinates, each exactly 32 bytes.
    pub fn new(x: &'a [u8], y: &'a [u8]) -> CryptoResult<Self> {
        Ok(Self {
            x: fixed::<FQ_LEN>(x)?,
            y: fixed::<FQ_LEN>(y)?,
        })
    }

    /// Borrows a 64-byte `x || y` encoding.
    pub fn from_slice(bytes: &'a [u8]) -> CryptoResult<Self> {
        let bytes = fixed::<G1_LEN>(bytes)?;
        let (x, y) = bytes.split_at(FQ_LEN);
        Self::new(x, y)
    }

    /// Copies into an owning point.
    pub fn to_point(&self) -> G1Point {
        G1Point {
            x: *self.x,
            y: *self.y,
        }
    }
}

impl<'a> From<&'a G1Point> for G1PointView<'a> {
    fn from(point: &'a G1Point) -> Self {
        Self {
            x: &point.x,
            y: &point.y,
        }
    }
}

impl G1Coordinates for G1PointView<'_> {
    fn x_bytes(&self) -> &[u8; FQ_LEN] {
        self.x
    }

    fn y_bytes(&self) -> &[u8; FQ_LEN] {
        self.y
    }
}

/// Owning G2 point encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct G2Point {
    x: [u8; FQ2_LEN],
    y: [u8; FQ2_LEN],
}

impl Default for G2Point {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl G2Point {
    /// Point at infinity, all coordinates zero.
    pub const IDENTITY: Self = Self {
        x: [0; FQ2_LEN],
        y: [0; FQ2_LEN],
    };

    /// Copies separate coordinates, each exactly 64 bytes.
    pub fn new(x: &[u8], y: &[u8]) -> CryptoResult<Self> {
        Ok(Self {
            x: *fixed::<FQ2_LEN>(x)?,
            y: *fixed::<FQ2_LEN>(y)?,
        })
    }

    /// Copies a 128-byte `x || y` encoding.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes = fixed::<G2_LEN>(bytes)?;
        let (x, y) = bytes.split_at(FQ2_LEN);
        Self::new(x, y)
    }

    /// Encodes an affine point.
    pub fn from_affine(point: &G2Affine) -> Self {
        Self {
            x: point.x().to_be_bytes(),
            y: point.y().to_be_bytes(),
        }
    }

    /// Borrowing view over this point.
    pub fn as_view(&self) -> G2PointView<'_> {
        G2PointView::from(self)
    }
}

impl From<G2Affine> for G2Point {
    fn from(point: G2Affine) -> Self {
        Self::from_affine(&point)
    }
}

impl G2Coordinates for G2Point {
    fn x_bytes(&self) -> &[u8; FQ2_LEN] {
        &self.x
    }

    fn y_bytes(&self) -> &[u8; FQ2_LEN] {
        &self.y
    }
}

/// G2 point encoding borrowed from caller buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct G2PointView<'a> {
    x: &'a [u8; FQ2_LEN],
    y: &'a [u8; FQ2_LEN],
}

impl<'a> G2PointView<'a> {
    /// Borrows separate coordinates, each exactly 64 bytes.
    pub fn new(x: &'a [u8], y: &'a [u8]) -> CryptoResult<Self> {
        Ok(Self {
            x: fixed::<FQ2_LEN>(x)?,
            y: fixed::<FQ2_LEN>(y)?,
        })
    }

    /// Borrows a 128-byte `x || y` encoding.
    pub fn from_slice(bytes: &'a [u8]) -> CryptoResult<Self> {
        let bytes = fixed::<G2_LEN>(bytes)?;
        let (x, y) = bytes.split_at(FQ2_LEN);
        Self::new(x, y)
    }

    /// Copies into an owning point.
    pub fn to_point(&self) -> G2Point {
        G2Point {
            x: *self.x,
            y: *self.y,
        }
    }
}

impl<'a> From<&'a G2Point> for G2PointView<'a> {
    fn from(point: &'a G2Point) -> Self {
        Self {
            x: &point.x,
            y: &point.y,
        }
    }
}

impl G2Coordinates for G2PointView<'_> {
    fn x_bytes(&self) -> &[u8; FQ2_LEN] {
        self.x
    }

    fn y_bytes(&self) -> &[u8; FQ2_LEN] {
        self.y
    }
}
