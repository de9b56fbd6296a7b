//! Polar meshed circular patch
use super::Patch;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::f64::consts::PI;

/// Circular patch, split into `n_rings` rings of equal width and
/// `n_sectors` sectors of equal angle.
///
/// # Example
/// ```
/// use rustinlet::patch::{DiscPatch, Patch};
/// let disc = DiscPatch::new(0.5, 4, 8, [0., 0., 0.], [0., 0., -1.]);
/// assert_eq!(disc.n_faces(), 32);
/// let area: f64 = disc.face_areas().unwrap().sum();
/// assert!((area - std::f64::consts::PI * 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DiscPatch {
    /// Outer radius
    pub radius: f64,
    centres: Array2<f64>,
    normals: Array2<f64>,
    areas: Array1<f64>,
}

impl DiscPatch {
    /// Return new disc around `centre`, with outward `normal`
    ///
    /// # Panics
    /// Negative radius, zero rings or sectors, or a zero normal.
    #[must_use]
    pub fn new(
        radius: f64,
        n_rings: usize,
        n_sectors: usize,
        centre: [f64; 3],
        normal: [f64; 3],
    ) -> Self {
        assert!(radius >= 0., "Radius must be positive, got {}.", radius);
        assert!(
            n_rings > 0 && n_sectors > 0,
            "Disc needs at least one ring and sector, got {} and {}.",
            n_rings,
            n_sectors
        );
        let normal = normalize(normal);
        let (e1, e2) = in_plane_basis(&normal);

        let n = n_rings * n_sectors;
        let mut centres = Array2::<f64>::zeros((n, 3));
        let mut normals = Array2::<f64>::zeros((n, 3));
        let mut areas = Array1::<f64>::zeros(n);
        let dr = radius / n_rings as f64;
        let dphi = 2. * PI / n_sectors as f64;
        for k in 0..n_rings {
            let (r_in, r_out) = (k as f64 * dr, (k + 1) as f64 * dr);
            let r = 0.5 * (r_in + r_out);
            let area = PI * (r_out * r_out - r_in * r_in) / n_sectors as f64;
            for j in 0..n_sectors {
                let i = k * n_sectors + j;
                let phi = (j as f64 + 0.5) * dphi;
                for d in 0..3 {
                    centres[[i, d]] = centre[d] + r * (phi.cos() * e1[d] + phi.sin() * e2[d]);
                    normals[[i, d]] = normal[d];
                }
                areas[i] = area;
            }
        }
        DiscPatch {
            radius,
            centres,
            normals,
            areas,
        }
    }
}

impl Patch for DiscPatch {
    fn face_centres(&self) -> ArrayView2<f64> {
        self.centres.view()
    }

    fn face_normals(&self) -> ArrayView2<f64> {
        self.normals.view()
    }

    fn face_areas(&self) -> Option<ArrayView1<f64>> {
        Some(self.areas.view())
    }
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let norm = dot(&v, &v).sqrt();
    assert!(norm > 0., "Normal must not be zero.");
    [v[0] / norm, v[1] / norm, v[2] / norm]
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Two orthonormal vectors perpendicular to unit vector `n`
fn in_plane_basis(n: &[f64; 3]) -> ([f64; 3], [f64; 3]) {
    let helper = if n[0].abs() < 0.9 {
        [1., 0., 0.]
    } else {
        [0., 1., 0.]
    };
    let e1 = normalize(cross(&helper, n));
    let e2 = cross(n, &e1);
    (e1, e2)
}
