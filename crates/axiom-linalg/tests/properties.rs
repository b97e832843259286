//! Randomized checks of the algebraic properties the containers and free functions guarantee.

use approx::assert_relative_eq;
use axiom_linalg::*;

const ITERATIONS: usize = 200;

fn random_vector(rng: &mut fastrand::Rng, len: usize) -> Vector<f64> {
    let data = (0..len).map(|_| rng.f64() * 200.0 - 100.0).collect();
    Vector::from_vec(data).unwrap()
}

fn random_int_vector(rng: &mut fastrand::Rng, len: usize) -> Vector<i64> {
    let data = (0..len).map(|_| rng.i64(-1000..=1000)).collect();
    Vector::from_vec(data).unwrap()
}

#[test]
fn filled_constructors() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..64);

        let ones = Vector::<f32>::ones(n).unwrap();
        assert_eq!(ones.len(), n);
        assert!(ones.iter().all(|&x| x == 1.0));

        let zeros = Vector::<u16>::zeros(n).unwrap();
        assert_eq!(zeros.len(), n);
        assert!(zeros.iter().all(|&x| x == 0));

        let cols = rng.usize(1..8);
        let m = Matrix::<i8>::ones(n, cols).unwrap();
        assert_eq!(m.shape(), (n, cols));
        assert!(m.iter().all(|&x| x == 1));
    }
}

#[test]
fn empty_containers_are_rejected() {
    assert_eq!(
        Vector::<f64>::new(0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        Vector::<f64>::ones(0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        Matrix::<f64>::new(0, 0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        Matrix::<f64>::identity(0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn dot_product_properties() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..32);
        let a = random_int_vector(&mut rng, n);
        let b = random_int_vector(&mut rng, n);

        assert_eq!(dot(&a, &b).unwrap(), dot(&b, &a).unwrap());
        assert!(dot(&a, &a).unwrap() >= 0);
        assert_eq!(dot(&a, &a).unwrap() as f64, len_squared(&a));
    }
}

#[test]
fn mismatched_lengths() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..16);
        let m = loop {
            let m = rng.usize(1..16);
            if m != n {
                break m;
            }
        };
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, m);

        let kind = |res: Result<()>| res.unwrap_err().kind();
        assert_eq!(kind(dot(&a, &b).map(drop)), ErrorKind::ShapeMismatch);
        assert_eq!(kind(min(&a, &b).map(drop)), ErrorKind::ShapeMismatch);
        assert_eq!(kind(max(&a, &b).map(drop)), ErrorKind::ShapeMismatch);
        assert_eq!(kind(distance(&a, &b).map(drop)), ErrorKind::ShapeMismatch);
        assert_eq!(kind(is_approx(&a, &b).map(drop)), ErrorKind::ShapeMismatch);
        assert_eq!(kind(a.add(&b).map(drop)), ErrorKind::ShapeMismatch);
        assert_eq!(kind(lerp(&a, &b, 0.5).map(drop)), ErrorKind::ShapeMismatch);
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..32);
        let v = random_vector(&mut rng, n);
        if len(&v) == 0.0 {
            continue;
        }
        let unit = normalize(&v).unwrap();
        assert!(
            (len(&unit) - 1.0).abs() <= 2.0 * f64::EPSILON,
            "|{unit}| = {}",
            len(&unit)
        );
    }

    let zero = Vector::<f32>::zeros(3).unwrap();
    assert_eq!(
        normalize(&zero).unwrap_err().kind(),
        ErrorKind::DivideByZero
    );
}

#[test]
fn projection() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..ITERATIONS {
        let u = random_vector(&mut rng, 3);
        let v = random_vector(&mut rng, 3);
        let p = proj(&u, &v).unwrap();

        // The projection is parallel to `v`, so the rejection is orthogonal to it.
        let rejection = u.subtract(&p).unwrap();
        let scale = len(&u) * len(&v);
        assert!(dot(&rejection, &v).unwrap().abs() <= 1e-9 * scale);
    }

    let u = Vector::from_vec(vec![1.0, 2.0]).unwrap();
    let zero = Vector::zeros(2).unwrap();
    assert_eq!(proj(&u, &zero).unwrap_err().kind(), ErrorKind::DivideByZero);
}

#[test]
fn cross_product_is_orthogonal() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..ITERATIONS {
        let a = random_int_vector(&mut rng, 3);
        let b = random_int_vector(&mut rng, 3);
        let c = cross(&a, &b).unwrap();

        assert_eq!(dot(&c, &a).unwrap(), 0);
        assert_eq!(dot(&c, &b).unwrap(), 0);
        assert_eq!(cross(&b, &a).unwrap(), c.negate());
    }
}

#[test]
fn reflection_preserves_length() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng, 3);
        let n = random_vector(&mut rng, 3);
        if len(&n) == 0.0 {
            continue;
        }
        let n = normalize(&n).unwrap();
        let r = reflect(&v, &n).unwrap();
        assert_relative_eq!(len(&r), len(&v), max_relative = 1e-9);
    }
}

#[test]
fn triangle_inequality() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..16);
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n);
        let c = random_vector(&mut rng, n);

        let ab = distance(&a, &b).unwrap();
        let bc = distance(&b, &c).unwrap();
        let ac = distance(&a, &c).unwrap();
        assert!(ac <= ab + bc + 1e-9);
        assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
    }
}

#[test]
fn reductions() {
    let v = Vector::from_vec(vec![3, 1, 4, 1, 5]).unwrap();
    assert_eq!(arg_min(&v).unwrap(), 1);
    assert_eq!(arg_max(&v).unwrap(), 4);
    assert_eq!(min_coeff(&v).unwrap(), 1);
    assert_eq!(max_coeff(&v).unwrap(), 5);
    assert_eq!(sum(&v), 14);

    let mut rng = fastrand::Rng::with_seed(8);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..32);
        let v = random_int_vector(&mut rng, n);
        let lo = min_coeff(&v).unwrap();
        let hi = max_coeff(&v).unwrap();
        assert!(v.iter().all(|&x| lo <= x && x <= hi));
        assert_eq!(v[arg_min(&v).unwrap()], lo);
        assert_eq!(v[arg_max(&v).unwrap()], hi);
    }
}

#[test]
fn checked_access() {
    let v = Vector::<i32>::zeros(5).unwrap();
    assert_eq!(v.at(4), Ok(&0));
    assert_eq!(v.at(5).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn matrix_layout() {
    let data: Vec<i32> = (0..6).collect();
    assert_eq!(
        Matrix::from_vec(data.clone(), 4).unwrap_err().kind(),
        ErrorKind::ShapeMismatch
    );

    let m = Matrix::from_vec(data.clone(), 3).unwrap();
    assert_eq!(m.shape(), (2, 3));
    for row in 0..2 {
        for col in 0..3 {
            assert_eq!(m[(row, col)], data[row * 3 + col]);
        }
    }

    for n in [1, 3, 10] {
        let id = Matrix::<i32>::identity(n).unwrap();
        assert_eq!(id.iter().filter(|&&x| x == 1).count(), n);
        assert_eq!(id.iter().sum::<i32>(), n as i32);
    }
}
