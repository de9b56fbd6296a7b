//! # Boundary patch geometry
//!
//! The mesh owns the geometry, boundary conditions only read a
//! snapshot of face centres and unit normals on every evaluation.
//! Implement [`Patch`] to hand a mesh boundary to a boundary condition.
//!
//! For decomposed meshes every partition holds a subset of the faces.
//! The reductions [`Patch::reduce_max`] and [`Patch::reduce_min`] are
//! collective: all partitions call them in the same order.
pub mod disc;
pub use disc::DiscPatch;

use crate::error::GeometryError;
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Data, Ix2};

/// Read access to the faces of a boundary patch
pub trait Patch {
    /// Face centres, shape (n_faces, 3)
    fn face_centres(&self) -> ArrayView2<f64>;

    /// Unit face normals pointing out of the domain, shape (n_faces, 3)
    fn face_normals(&self) -> ArrayView2<f64>;

    /// Face areas, if known
    fn face_areas(&self) -> Option<ArrayView1<f64>> {
        None
    }

    /// Maximum over all partitions holding this patch
    fn reduce_max(&self, local: f64) -> f64 {
        local
    }

    /// Minimum over all partitions holding this patch
    fn reduce_min(&self, local: f64) -> f64 {
        local
    }

    /// Number of faces on this partition
    fn n_faces(&self) -> usize {
        self.face_centres().nrows()
    }
}

/// Check that centres and normals are index aligned,
/// three dimensional and finite.
///
/// # Errors
/// First violated precondition.
pub fn check_patch<P: Patch + ?Sized>(patch: &P) -> Result<(), GeometryError> {
    let centres = patch.face_centres();
    let normals = patch.face_normals();
    check_vectors("face centres", &centres)?;
    check_vectors("face normals", &normals)?;
    if centres.nrows() != normals.nrows() {
        return Err(GeometryError::SizeMismatch {
            left: "face centres",
            nleft: centres.nrows(),
            right: "face normals",
            nright: normals.nrows(),
        });
    }
    if let Some(areas) = patch.face_areas() {
        if areas.len() != centres.nrows() {
            return Err(GeometryError::SizeMismatch {
                left: "face centres",
                nleft: centres.nrows(),
                right: "face areas",
                nright: areas.len(),
            });
        }
        if let Some(face) = areas.iter().position(|a| !a.is_finite()) {
            return Err(GeometryError::NonFinite {
                name: "face areas",
                face,
            });
        }
    }
    Ok(())
}

fn check_vectors<S>(name: &'static str, v: &ArrayBase<S, Ix2>) -> Result<(), GeometryError>
where
    S: Data<Elem = f64>,
{
    if v.ncols() != 3 {
        return Err(GeometryError::NotThreeDimensional {
            name,
            ncols: v.ncols(),
        });
    }
    for (face, row) in v.rows().into_iter().enumerate() {
        if row.iter().any(|x| !x.is_finite()) {
            return Err(GeometryError::NonFinite { name, face });
        }
    }
    Ok(())
}

/// Owned snapshot of a serial patch
#[derive(Debug, Clone, PartialEq)]
pub struct PatchGeometry {
    /// Face centres
    centres: Array2<f64>,
    /// Unit face normals
    normals: Array2<f64>,
    /// Face areas
    areas: Option<Array1<f64>>,
}

impl PatchGeometry {
    /// Return new patch geometry
    ///
    /// # Errors
    /// Arrays are not (n_faces, 3), differ in length, or contain
    /// non-finite values.
    pub fn new(centres: Array2<f64>, normals: Array2<f64>) -> Result<Self, GeometryError> {
        let geometry = PatchGeometry {
            centres,
            normals,
            areas: None,
        };
        check_patch(&geometry)?;
        Ok(geometry)
    }

    /// Attach face areas
    ///
    /// # Errors
    /// Length differs from the number of faces or areas are not finite.
    pub fn with_areas(mut self, areas: Array1<f64>) -> Result<Self, GeometryError> {
        self.areas = Some(areas);
        check_patch(&self)?;
        Ok(self)
    }
}

impl Patch for PatchGeometry {
    fn face_centres(&self) -> ArrayView2<f64> {
        self.centres.view()
    }

    fn face_normals(&self) -> ArrayView2<f64> {
        self.normals.view()
    }

    fn face_areas(&self) -> Option<ArrayView1<f64>> {
        self.areas.as_ref().map(|a| a.view())
    }
}

/// Axis aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundBox {
    /// Lower corner
    pub min: [f64; 3],
    /// Upper corner
    pub max: [f64; 3],
}

impl BoundBox {
    /// Inverted box, contains nothing
    pub fn inverted() -> Self {
        BoundBox {
            min: [f64::INFINITY; 3],
            max: [f64::NEG_INFINITY; 3],
        }
    }

    /// Bounding box of the rows of `points`, shape (n, 3)
    pub fn from_points<S>(points: &ArrayBase<S, Ix2>) -> Self
    where
        S: Data<Elem = f64>,
    {
        let mut bb = Self::inverted();
        for p in points.rows() {
            for d in 0..3 {
                bb.min[d] = bb.min[d].min(p[d]);
                bb.max[d] = bb.max[d].max(p[d]);
            }
        }
        bb
    }

    /// Bounding box of the face centres over all partitions
    pub fn from_patch<P: Patch + ?Sized>(patch: &P) -> Self {
        let local = Self::from_points(&patch.face_centres());
        let mut bb = Self::inverted();
        for d in 0..3 {
            bb.min[d] = patch.reduce_min(local.min[d]);
            bb.max[d] = patch.reduce_max(local.max[d]);
        }
        bb
    }

    /// True if the box contains no point
    pub fn is_empty(&self) -> bool {
        (0..3).any(|d| self.min[d] > self.max[d])
    }

    /// Midpoint, origin for an empty box
    pub fn centre(&self) -> [f64; 3] {
        if self.is_empty() {
            return [0.; 3];
        }
        let mut c = [0.; 3];
        for (d, ci) in c.iter_mut().enumerate() {
            *ci = 0.5 * (self.min[d] + self.max[d]);
        }
        c
    }

    /// Extent along each axis, zero for an empty box
    pub fn span(&self) -> [f64; 3] {
        if self.is_empty() {
            return [0.; 3];
        }
        let mut s = [0.; 3];
        for (d, si) in s.iter_mut().enumerate() {
            *si = self.max[d] - self.min[d];
        }
        s
    }
}

/// Distance of every row of `points` from `centre`
pub fn radii<S>(points: &ArrayBase<S, Ix2>, centre: &[f64; 3]) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    points
        .rows()
        .into_iter()
        .map(|p| {
            (0..3)
                .map(|d| (p[d] - centre[d]).powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_bound_box_centre() {
        let points = array![[0., 0., 1.], [2., -1., 1.], [1., 3., 1.]];
        let bb = BoundBox::from_points(&points);
        assert_eq!(bb.min, [0., -1., 1.]);
        assert_eq!(bb.max, [2., 3., 1.]);
        assert_eq!(bb.centre(), [1., 1., 1.]);
        assert_eq!(bb.span(), [2., 4., 0.]);
    }

    #[test]
    fn test_empty_bound_box() {
        let points = Array2::<f64>::zeros((0, 3));
        let bb = BoundBox::from_points(&points);
        assert!(bb.is_empty());
        assert_eq!(bb.centre(), [0.; 3]);
    }

    #[test]
    fn test_radii() {
        let points = array![[3., 4., 0.], [1., 1., 1.]];
        let r = radii(&points, &[0., 0., 0.]);
        assert!((r[0] - 5.).abs() < 1e-12);
        assert!((r[1] - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_geometry_rejects_mismatch() {
        let centres = array![[0., 0., 0.], [1., 0., 0.]];
        let normals = array![[0., 0., 1.]];
        let err = PatchGeometry::new(centres, normals).unwrap_err();
        assert!(matches!(err, GeometryError::SizeMismatch { .. }));
    }

    #[test]
    fn test_geometry_rejects_non_finite() {
        let centres = array![[0., 0., 0.], [f64::NAN, 0., 0.]];
        let normals = array![[0., 0., 1.], [0., 0., 1.]];
        let err = PatchGeometry::new(centres, normals).unwrap_err();
        assert_eq!(
            err,
            GeometryError::NonFinite {
                name: "face centres",
                face: 1
            }
        );
    }

    #[test]
    fn test_geometry_rejects_two_dimensional() {
        let centres = array![[0., 0.], [1., 0.]];
        let normals = array![[0., 1.], [0., 1.]];
        let err = PatchGeometry::new(centres, normals).unwrap_err();
        assert!(matches!(err, GeometryError::NotThreeDimensional { .. }));
    }

    #[test]
    fn test_geometry_with_areas() {
        let centres = array![[0., 0., 0.], [1., 0., 0.]];
        let normals = array![[0., 0., 1.], [0., 0., 1.]];
        let geometry = PatchGeometry::new(centres, normals).unwrap();
        assert!(geometry.clone().with_areas(array![1.]).is_err());
        let geometry = geometry.with_areas(array![0.5, 0.25]).unwrap();
        assert_eq!(geometry.face_areas().unwrap().sum(), 0.75);
        assert_eq!(geometry.n_faces(), 2);
    }
}
