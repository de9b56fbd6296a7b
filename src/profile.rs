//! # Parabolic (Poiseuille) velocity profile
//!
//! Maps a flow rate $Q$ onto the faces of a patch with maximum radius $R$
//! $$
//! u(r) = 2 \frac{Q}{\pi R^2} \left( 1 - \left(\frac{r}{R}\right)^2 \right)
//! $$
//! The peak velocity at $r = 0$ is twice the mean velocity $Q / (\pi R^2)$,
//! the velocity vanishes at $r = R$.
use crate::error::GeometryError;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2, Zip};
use std::f64::consts::PI;

/// Return parabolic speed at radius `r`.
///
/// Not defined for `r_max == 0`. Faces outside of `r_max` extrapolate
/// the parabola, the result is not clamped.
pub fn parabolic_speed(q: f64, r_max: f64, r: f64) -> f64 {
    2. * (q / (PI * r_max * r_max)) * (1. - (r / r_max).powi(2))
}

/// Return parabolic speed for every face.
///
/// A degenerate patch, whose squared radius vanishes in floating point,
/// returns zeros.
pub fn parabolic_speed_field<S>(q: f64, r_max: f64, radii: &ArrayBase<S, Ix1>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    if !(q / (PI * r_max * r_max)).is_finite() && q.is_finite() {
        tracing::warn!(
            "degenerate patch with radius {:e} ({} faces), prescribing zero velocity",
            r_max,
            radii.len()
        );
        return Array1::zeros(radii.len());
    }
    radii.mapv(|r| parabolic_speed(q, r_max, r))
}

/// Return the velocity for every face, oriented against the face normal.
///
/// Row `i` of the result is $-u(r_i) \mathbf{n}_i$. With outward pointing
/// normals a positive flow rate enters the domain.
///
/// # Errors
/// `normals` does not have three columns, or its length differs from `radii`.
///
/// # Example
/// ```
/// use ndarray::array;
/// use rustinlet::profile::parabolic_velocity;
/// let radii = array![1.];
/// let normals = array![[0., 0., 1.]];
/// let u = parabolic_velocity(1., 2., &radii, &normals).unwrap();
/// let expected = 0.375 / std::f64::consts::PI;
/// assert!((u[[0, 2]] + expected).abs() < 1e-12);
/// ```
pub fn parabolic_velocity<S1, S2>(
    q: f64,
    r_max: f64,
    radii: &ArrayBase<S1, Ix1>,
    normals: &ArrayBase<S2, Ix2>,
) -> Result<Array2<f64>, GeometryError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if normals.ncols() != 3 {
        return Err(GeometryError::NotThreeDimensional {
            name: "normals",
            ncols: normals.ncols(),
        });
    }
    if radii.len() != normals.nrows() {
        return Err(GeometryError::SizeMismatch {
            left: "radii",
            nleft: radii.len(),
            right: "normals",
            nright: normals.nrows(),
        });
    }
    let speed = parabolic_speed_field(q, r_max, radii);
    let mut velocity = Array2::<f64>::zeros((radii.len(), 3));
    Zip::from(velocity.rows_mut())
        .and(normals.rows())
        .and(&speed)
        .for_each(|mut u, n, &m| {
            for (ui, ni) in u.iter_mut().zip(n.iter()) {
                *ui = -m * ni;
            }
        });
    Ok(velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    fn approx_eq<S, D>(result: &ArrayBase<S, D>, expected: &ArrayBase<S, D>)
    where
        S: Data<Elem = f64>,
        D: ndarray::Dimension,
    {
        let dif = 1e-10;
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    fn test_no_slip_at_max_radius() {
        for q in [-3., 0.5, 12.].iter() {
            for r_max in [0.1, 1., 7.5].iter() {
                assert!(parabolic_speed(*q, *r_max, *r_max).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_peak_at_centre() {
        let (q, r_max) = (2.5, 0.3);
        let peak = parabolic_speed(q, r_max, 0.);
        let mean = q / (PI * r_max * r_max);
        assert!((peak - 2. * mean).abs() < 1e-10);
    }

    #[test]
    fn test_worked_example() {
        let radii = array![1., 0., 2.];
        let normals = array![[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]];
        let u = parabolic_velocity(1., 2., &radii, &normals).unwrap();
        let m = 0.375 / PI;
        let peak = 2. / (PI * 4.);
        let expected = array![[-m, 0., 0.], [0., -peak, 0.], [0., 0., 0.]];
        approx_eq(&u, &expected);
    }

    #[test]
    fn test_flow_reversal_points_along_normal() {
        let radii = array![0.5];
        let normals = array![[0., -1., 0.]];
        let u = parabolic_velocity(-1., 1., &radii, &normals).unwrap();
        assert!(u[[0, 1]] < 0.);
        assert_eq!(u[[0, 0]], 0.);
    }

    #[test]
    fn test_outside_radius_is_not_clamped() {
        assert!(parabolic_speed(1., 1., 1.5) < 0.);
    }

    #[test]
    fn test_degenerate_patch_is_zero() {
        let radii = array![0., 0.];
        let normals = array![[0., 0., 1.], [0., 0., 1.]];
        let u = parabolic_velocity(4., 0., &radii, &normals).unwrap();
        assert_eq!(u.shape(), &[2, 3]);
        assert!(u.iter().all(|x| *x == 0.));
    }

    #[test]
    fn test_tiny_radius_is_degenerate() {
        let radii = array![5e-161, 5e-161, 0.];
        let normals = array![[0., 0., 1.], [0., 0., 1.], [0., 0., 1.]];
        for q in [0., 1., -3.].iter() {
            let u = parabolic_velocity(*q, 5e-161, &radii, &normals).unwrap();
            assert!(u.iter().all(|x| *x == 0.));
        }
    }

    #[test]
    fn test_velocity_is_parallel_to_normal() {
        let n = 50;
        let radii = Array1::<f64>::random(n, Uniform::new(0., 1.));
        let mut normals = Array2::<f64>::random((n, 3), Uniform::new(-1., 1.));
        for mut row in normals.rows_mut() {
            let norm = row.dot(&row).sqrt();
            row /= norm;
        }
        let u = parabolic_velocity(0.8, 1., &radii, &normals).unwrap();
        for ((u, n), r) in u.rows().into_iter().zip(normals.rows()).zip(radii.iter()) {
            let m = parabolic_speed(0.8, 1., *r);
            let cross = [
                u[1] * n[2] - u[2] * n[1],
                u[2] * n[0] - u[0] * n[2],
                u[0] * n[1] - u[1] * n[0],
            ];
            assert!(cross.iter().all(|c| c.abs() < 1e-12));
            assert!((u.dot(&n) + m).abs() < 1e-12);
        }
    }

    #[test]
    fn test_size_mismatch() {
        let radii = array![0., 1.];
        let normals = array![[0., 0., 1.]];
        let err = parabolic_velocity(1., 1., &radii, &normals).unwrap_err();
        assert!(matches!(err, GeometryError::SizeMismatch { .. }));
        let normals = array![[0., 1.], [1., 0.]];
        let err = parabolic_velocity(1., 1., &radii, &normals).unwrap_err();
        assert!(matches!(err, GeometryError::NotThreeDimensional { .. }));
    }
}
