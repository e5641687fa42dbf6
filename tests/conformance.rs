//! Domain-independent properties of the routine catalog, checked for each of
//! `f32`, `f64`, `Complex32` and `Complex64`.

use approx::assert_relative_eq;
use num_complex::{Complex32, Complex64};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use strided_blas::blas::*;
use strided_blas::{BlasError, BlasScalar, Diag, ElementOpApply, Transpose, Uplo};

macro_rules! conformance_suite {
    (
        $module:ident, $t:ty, $r:ty, eps = $eps:expr, mk = $mk:expr;
        scal: $scal:ident,
        swap: $swap:ident,
        axpy: $axpy:ident,
        dotc: $dotc:ident,
        rotg: $rotg:ident,
        rot: $rot:ident,
        nrm2: $nrm2:ident,
        iamax: $iamax:ident,
        gemv: $gemv:ident,
        symv: $symv:ident,
        spmv: $spmv:ident,
        trmv: $trmv:ident,
        trsv: $trsv:ident,
        gemm: $gemm:ident,
        syrk: $syrk:ident
    ) => {
        mod $module {
            use super::*;

            const EPS: $r = $eps;

            fn mk(re: f64, im: f64) -> $t {
                let f: fn(f64, f64) -> $t = $mk;
                f(re, im)
            }

            fn nan() -> $t {
                mk(f64::NAN, f64::NAN)
            }

            fn close(a: $t, b: $t) -> bool {
                let scale = <$r as num_traits::One>::one() + b.modulus();
                (a - b).modulus() <= EPS * scale
            }

            fn assert_all_close(got: &[$t], want: &[$t]) {
                assert_eq!(got.len(), want.len());
                for (i, (g, w)) in got.iter().zip(want.iter()).enumerate() {
                    assert!(close(*g, *w), "element {i}: got {g:?}, want {w:?}");
                }
            }

            fn random_vec(rng: &mut StdRng, len: usize) -> Vec<$t> {
                (0..len)
                    .map(|_| mk(rng.sample(StandardNormal), rng.sample(StandardNormal)))
                    .collect()
            }

            fn op_at(a: &[$t], lda: usize, trans: Transpose, i: usize, j: usize) -> $t {
                match trans {
                    Transpose::NoTrans => a[j * lda + i],
                    Transpose::Trans => a[i * lda + j],
                    Transpose::ConjTrans => a[i * lda + j].conj(),
                }
            }

            #[test]
            fn test_scal_by_one_and_zero() {
                let mut rng = StdRng::seed_from_u64(1);
                let orig = random_vec(&mut rng, 9);

                let mut x = orig.clone();
                $scal(5, mk(1.0, 0.0), &mut x, 2).unwrap();
                assert_eq!(x, orig);

                $scal(5, mk(0.0, 0.0), &mut x, 2).unwrap();
                for (i, v) in x.iter().enumerate() {
                    if i % 2 == 0 {
                        assert_eq!(*v, mk(0.0, 0.0));
                    } else {
                        assert_eq!(*v, orig[i]);
                    }
                }
            }

            #[test]
            fn test_swap_twice_restores() {
                let mut rng = StdRng::seed_from_u64(2);
                let x0 = random_vec(&mut rng, 4);
                let y0 = random_vec(&mut rng, 8);
                let (mut x, mut y) = (x0.clone(), y0.clone());

                $swap(4, &mut x, 1, &mut y, -2).unwrap();
                // logical y[0] is stored last
                assert_eq!(x[0], y0[6]);
                assert_eq!(y[6], x0[0]);
                $swap(4, &mut x, 1, &mut y, -2).unwrap();
                assert_eq!(x, x0);
                assert_eq!(y, y0);
            }

            #[test]
            fn test_dotc_conjugate_symmetry() {
                let mut rng = StdRng::seed_from_u64(3);
                let x = random_vec(&mut rng, 6);
                let y = random_vec(&mut rng, 6);
                let xy = $dotc(6, &x, 1, &y, 1).unwrap();
                let yx = $dotc(6, &y, 1, &x, 1).unwrap();
                assert!(close(xy, yx.conj()));

                let xx = $dotc(6, &x, 1, &x, 1).unwrap();
                assert!(xx.im().abs() <= EPS * xx.re());
                let norm = $nrm2(6, &x, 1).unwrap();
                assert!(close(xx, mk((norm * norm) as f64, 0.0)));
            }

            #[test]
            fn test_axpy_zero_alpha_ignores_x() {
                let x = vec![nan(); 3];
                let mut y = vec![mk(1.0, 2.0), mk(3.0, 0.0), mk(-1.0, 0.5)];
                let y0 = y.clone();
                $axpy(3, mk(0.0, 0.0), &x, 1, &mut y, 1).unwrap();
                assert_eq!(y, y0);

                $axpy(3, mk(2.0, 0.0), &y0, 1, &mut y, -1).unwrap();
                assert!(close(y[0], y0[0] + y0[2] * mk(2.0, 0.0)));
                assert!(close(y[2], y0[2] + y0[0] * mk(2.0, 0.0)));
            }

            #[test]
            fn test_rotg_annihilates_second_component() {
                let g = $rotg(mk(3.0, 0.0), mk(4.0, 0.0));
                assert!(close(g.r, mk(5.0, 0.0)));

                let mut x = [mk(3.0, 0.0)];
                let mut y = [mk(4.0, 0.0)];
                $rot(1, &mut x, 1, &mut y, 1, g.c, g.s).unwrap();
                assert!(close(x[0], mk(5.0, 0.0)));
                assert!(y[0].modulus() <= EPS);
            }

            #[test]
            fn test_nrm2_is_homogeneous() {
                let x = [mk(3.0, 0.0), mk(4.0, 0.0)];
                let doubled = [mk(6.0, 0.0), mk(8.0, 0.0)];
                assert_relative_eq!($nrm2(2, &x, 1).unwrap(), 5.0, epsilon = EPS);
                assert_relative_eq!($nrm2(2, &doubled, 1).unwrap(), 10.0, epsilon = EPS);
                assert_eq!($nrm2(0, &x, 1).unwrap(), 0.0);
            }

            #[test]
            fn test_iamax_forward_and_reversed() {
                let forward = [mk(1.0, 0.0), mk(-7.0, 0.0), mk(3.0, 0.0)];
                let reversed = [mk(3.0, 0.0), mk(-7.0, 0.0), mk(1.0, 0.0)];
                assert_eq!($iamax(3, &forward, 1).unwrap(), Some(1));
                assert_eq!($iamax(3, &reversed, -1).unwrap(), Some(1));
                assert_eq!($iamax(0, &forward, 1).unwrap(), None);

                // ties resolve to the first occurrence
                let tied = [mk(2.0, 0.0), mk(-2.0, 0.0)];
                assert_eq!($iamax(2, &tied, 1).unwrap(), Some(0));
            }

            #[test]
            fn test_gemv_identity_with_padding() {
                // 3x3 identity with lda = 4; padding slots are never read
                let mut a = vec![nan(); 12];
                for j in 0..3 {
                    for i in 0..3 {
                        a[j * 4 + i] = mk(if i == j { 1.0 } else { 0.0 }, 0.0);
                    }
                }
                let x = [mk(1.0, -1.0), mk(2.0, 0.5), mk(-3.0, 0.0)];
                let mut y = vec![nan(); 3];
                $gemv(Transpose::NoTrans, 3, 3, mk(1.0, 0.0), &a, 4, &x, 1, mk(0.0, 0.0), &mut y, 1)
                    .unwrap();
                assert_eq!(y, x.to_vec());
            }

            #[test]
            fn test_packed_matches_dense() {
                let mut rng = StdRng::seed_from_u64(4);
                let n = 4;
                let raw = random_vec(&mut rng, n * n);
                // a = raw + raw^H (symmetric in real domains)
                let mut a = vec![mk(0.0, 0.0); n * n];
                for j in 0..n {
                    for i in 0..n {
                        let v = raw[j * n + i] + raw[i * n + j].conj();
                        a[j * n + i] = if <$t as BlasScalar>::IS_COMPLEX {
                            v
                        } else {
                            raw[j * n + i] + raw[i * n + j]
                        };
                    }
                }
                let x = random_vec(&mut rng, n);
                let y0 = random_vec(&mut rng, n);
                let (alpha, beta) = (mk(0.5, 0.25), mk(-1.0, 0.0));

                for uplo in [Uplo::Upper, Uplo::Lower] {
                    let mut packed = Vec::with_capacity(n * (n + 1) / 2);
                    for j in 0..n {
                        let rows = match uplo {
                            Uplo::Upper => 0..j + 1,
                            Uplo::Lower => j..n,
                        };
                        for i in rows {
                            packed.push(a[j * n + i]);
                        }
                    }

                    let mut yd = y0.clone();
                    let mut yp = y0.clone();
                    $symv(uplo, n, alpha, &a, n, &x, 1, beta, &mut yd, 1).unwrap();
                    $spmv(uplo, n, alpha, &packed, &x, 1, beta, &mut yp, 1).unwrap();
                    assert_all_close(&yp, &yd);

                    // dense reference
                    let want: Vec<$t> = (0..n)
                        .map(|i| {
                            let ax = (0..n).fold(mk(0.0, 0.0), |acc, j| acc + a[j * n + i] * x[j]);
                            alpha * ax + beta * y0[i]
                        })
                        .collect();
                    assert_all_close(&yd, &want);
                }
            }

            #[test]
            fn test_trsv_inverts_trmv() {
                let mut rng = StdRng::seed_from_u64(5);
                let off = random_vec(&mut rng, 3);
                // unit upper, diagonal and lower slots hold NaN
                let mut a = vec![nan(); 9];
                a[3] = off[0];
                a[6] = off[1];
                a[7] = off[2];
                let x0 = random_vec(&mut rng, 3);

                for trans in [Transpose::NoTrans, Transpose::Trans, Transpose::ConjTrans] {
                    let mut x = x0.clone();
                    $trmv(Uplo::Upper, trans, Diag::Unit, 3, &a, 3, &mut x, 1).unwrap();
                    $trsv(Uplo::Upper, trans, Diag::Unit, 3, &a, 3, &mut x, 1).unwrap();
                    assert_all_close(&x, &x0);
                }
            }

            #[test]
            fn test_trsv_inverts_trmv_literal() {
                // [[1, 2, 3], [0, 1, 4], [0, 0, 1]] with an unread NaN diagonal
                let a = [
                    nan(),
                    nan(),
                    nan(),
                    mk(2.0, 0.0),
                    nan(),
                    nan(),
                    mk(3.0, 0.0),
                    mk(4.0, 0.0),
                    nan(),
                ];
                let x0 = [mk(1.0, 0.0), mk(2.0, 0.0), mk(3.0, 0.0)];
                let mut x = x0;
                $trmv(Uplo::Upper, Transpose::NoTrans, Diag::Unit, 3, &a, 3, &mut x, 1).unwrap();
                assert_eq!(x, [mk(14.0, 0.0), mk(14.0, 0.0), mk(3.0, 0.0)]);
                $trsv(Uplo::Upper, Transpose::NoTrans, Diag::Unit, 3, &a, 3, &mut x, 1).unwrap();
                assert_all_close(&x, &x0);
            }

            #[test]
            fn test_gemm_matches_naive() {
                let mut rng = StdRng::seed_from_u64(6);
                let (m, n, k) = (5, 4, 3);
                let modes = [Transpose::NoTrans, Transpose::Trans, Transpose::ConjTrans];
                let alpha = mk(1.5, -0.5);
                let beta = mk(0.5, 0.0);

                for transa in modes {
                    for transb in modes {
                        let lda = if transa.is_transposed() { k } else { m };
                        let ldb = if transb.is_transposed() { n } else { k };
                        let a = random_vec(&mut rng, lda * if transa.is_transposed() { m } else { k });
                        let b = random_vec(&mut rng, ldb * if transb.is_transposed() { k } else { n });
                        let c0 = random_vec(&mut rng, m * n);

                        let mut c = c0.clone();
                        $gemm(transa, transb, m, n, k, alpha, &a, lda, &b, ldb, beta, &mut c, m)
                            .unwrap();

                        let mut want = c0.clone();
                        for j in 0..n {
                            for i in 0..m {
                                let s = (0..k).fold(mk(0.0, 0.0), |acc, l| {
                                    acc + op_at(&a, lda, transa, i, l) * op_at(&b, ldb, transb, l, j)
                                });
                                want[j * m + i] = alpha * s + beta * c0[j * m + i];
                            }
                        }
                        assert_all_close(&c, &want);
                    }
                }
            }

            #[test]
            fn test_gemm_beta_zero_overwrites_nan() {
                let a = [mk(1.0, 0.0), mk(2.0, 0.0)];
                let b = [mk(3.0, 0.0), mk(4.0, 0.0)];
                let mut c = vec![nan(); 4];
                $gemm(
                    Transpose::NoTrans,
                    Transpose::NoTrans,
                    2,
                    2,
                    1,
                    mk(1.0, 0.0),
                    &a,
                    2,
                    &b,
                    1,
                    mk(0.0, 0.0),
                    &mut c,
                    2,
                )
                .unwrap();
                assert_eq!(c, vec![mk(3.0, 0.0), mk(6.0, 0.0), mk(4.0, 0.0), mk(8.0, 0.0)]);
            }

            #[test]
            fn test_gemm_rejects_before_writing() {
                let a = [mk(1.0, 0.0); 4];
                let mut c = vec![mk(7.0, 0.0); 4];
                let err = $gemm(
                    Transpose::NoTrans,
                    Transpose::NoTrans,
                    2,
                    2,
                    2,
                    mk(1.0, 0.0),
                    &a,
                    2,
                    &a,
                    2,
                    mk(0.0, 0.0),
                    &mut c,
                    1,
                )
                .unwrap_err();
                assert!(matches!(err, BlasError::LeadingDimension { arg: "c", .. }));
                assert_eq!(c, vec![mk(7.0, 0.0); 4]);
            }

            #[test]
            fn test_syrk_beta_zero_ignores_nan() {
                let mut rng = StdRng::seed_from_u64(7);
                let (n, k) = (3, 2);
                let a = random_vec(&mut rng, n * k);
                let mut c = vec![nan(); n * n];
                $syrk(Uplo::Upper, Transpose::NoTrans, n, k, mk(1.0, 0.0), &a, n, mk(0.0, 0.0), &mut c, n)
                    .unwrap();
                for j in 0..n {
                    for i in 0..n {
                        let got = c[j * n + i];
                        if i <= j {
                            let want = (0..k).fold(mk(0.0, 0.0), |acc, l| acc + a[l * n + i] * a[l * n + j]);
                            assert!(close(got, want), "({i}, {j}): {got:?} vs {want:?}");
                        } else {
                            assert!(got.re().is_nan(), "strictly lower ({i}, {j}) was written");
                        }
                    }
                }
            }
        }
    };
}

conformance_suite!(single, f32, f32, eps = 1e-4, mk = |re, _| re as f32;
    scal: sscal, swap: sswap, axpy: saxpy, dotc: sdot, rotg: srotg, rot: srot,
    nrm2: snrm2, iamax: isamax, gemv: sgemv, symv: ssymv, spmv: sspmv,
    trmv: strmv, trsv: strsv, gemm: sgemm, syrk: ssyrk);

conformance_suite!(double, f64, f64, eps = 1e-10, mk = |re, _| re;
    scal: dscal, swap: dswap, axpy: daxpy, dotc: ddot, rotg: drotg, rot: drot,
    nrm2: dnrm2, iamax: idamax, gemv: dgemv, symv: dsymv, spmv: dspmv,
    trmv: dtrmv, trsv: dtrsv, gemm: dgemm, syrk: dsyrk);

conformance_suite!(complex_single, Complex32, f32, eps = 1e-4,
    mk = |re, im| Complex32::new(re as f32, im as f32);
    scal: cscal, swap: cswap, axpy: caxpy, dotc: cdotc, rotg: crotg, rot: crot,
    nrm2: scnrm2, iamax: icamax, gemv: cgemv, symv: chemv, spmv: chpmv,
    trmv: ctrmv, trsv: ctrsv, gemm: cgemm, syrk: csyrk);

conformance_suite!(complex_double, Complex64, f64, eps = 1e-10,
    mk = |re, im| Complex64::new(re, im);
    scal: zscal, swap: zswap, axpy: zaxpy, dotc: zdotc, rotg: zrotg, rot: zrot,
    nrm2: dznrm2, iamax: izamax, gemv: zgemv, symv: zhemv, spmv: zhpmv,
    trmv: ztrmv, trsv: ztrsv, gemm: zgemm, syrk: zsyrk);

// ============================================================================
// Routines that exist in only some domains
// ============================================================================

#[test]
fn test_mixed_precision_dots() {
    let x = [1.0e8_f32, 1.0, -1.0e8];
    let y = [1.0_f32, 1.0, 1.0];
    // f32 accumulation would lose the middle term
    assert_eq!(dsdot(3, &x, 1, &y, 1).unwrap(), 1.0);
    assert_eq!(sdsdot(3, 0.5, &x, 1, &y, 1).unwrap(), 1.5);
    assert_eq!(dsdot(0, &x, 1, &y, 1).unwrap(), 0.0);
}

#[test]
fn test_rotmg_then_rotm_zeroes_y() {
    let (mut d1, mut d2, mut x1) = (2.0_f64, 3.0, 1.5);
    let y1 = -0.5;
    let before = (2.0_f64.sqrt() * 1.5).hypot(3.0_f64.sqrt() * y1);
    let param = drotmg(&mut d1, &mut d2, &mut x1, y1);

    let mut x = [1.5];
    let mut y = [y1];
    drotm(1, &mut x, 1, &mut y, 1, &param).unwrap();
    assert_relative_eq!(y[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(x[0], x1, epsilon = 1e-12);
    assert_relative_eq!(d1.sqrt() * x1.abs(), before, epsilon = 1e-12);
}

#[test]
fn test_rotm_param_encoding() {
    use strided_blas::RotmParams;

    let p = RotmParams::OffDiagonal { h21: 0.5_f64, h12: -0.25 };
    assert_eq!(p.to_array(), [0.0, 0.0, 0.5, -0.25, 0.0]);
    assert_eq!(RotmParams::from_array(p.to_array()).unwrap(), p);
    assert!(RotmParams::<f64>::from_array([3.0, 0.0, 0.0, 0.0, 0.0]).is_err());

    // identity never touches the vectors, even NaN ones
    let mut x = [f32::NAN, 1.0];
    let mut y = [2.0_f32, 3.0];
    srotm(2, &mut x, 1, &mut y, 1, &RotmParams::Identity).unwrap();
    assert!(x[0].is_nan());
    assert_eq!(y, [2.0, 3.0]);
}

#[test]
fn test_real_rotation_and_scaling_of_complex_data() {
    let mut x = [Complex64::new(1.0, 2.0)];
    let mut y = [Complex64::new(3.0, -1.0)];
    zdrot(1, &mut x, 1, &mut y, 1, 0.0, 1.0).unwrap();
    assert_eq!(x[0], Complex64::new(3.0, -1.0));
    assert_eq!(y[0], Complex64::new(-1.0, -2.0));

    zdscal(1, 2.0, &mut x, 1).unwrap();
    assert_eq!(x[0], Complex64::new(6.0, -2.0));
}

#[test]
fn test_herk_keeps_diagonal_real() {
    let a = [Complex64::new(1.0, 1.0), Complex64::new(0.0, 2.0)];
    let mut c = [Complex64::new(f64::NAN, f64::NAN); 4];
    zherk(Uplo::Lower, Transpose::NoTrans, 2, 1, 1.0, &a, 2, 0.0, &mut c, 2).unwrap();
    assert_eq!(c[0], Complex64::new(2.0, 0.0));
    assert_eq!(c[3], Complex64::new(4.0, 0.0));
    // c[1] = a1 * conj(a0) = 2i * (1 - i)
    assert_eq!(c[1], Complex64::new(2.0, 2.0));
    assert!(c[2].re.is_nan());

    let err = zherk(Uplo::Lower, Transpose::Trans, 2, 1, 1.0, &a, 1, 0.0, &mut c, 2).unwrap_err();
    assert!(matches!(err, BlasError::UnsupportedTranspose { .. }));
}

// ============================================================================
// Argument validation
// ============================================================================

#[test]
fn test_modifier_codes() {
    assert_eq!(Transpose::try_from('c').unwrap(), Transpose::ConjTrans);
    assert_eq!("L".parse::<Uplo>().unwrap(), Uplo::Lower);
    assert_eq!(Diag::try_from('U').unwrap(), Diag::Unit);
    assert_eq!(
        Transpose::try_from('X').unwrap_err(),
        BlasError::InvalidModifier {
            kind: "transpose",
            code: 'X'
        }
    );
}

#[test]
fn test_zero_increment_rules() {
    // reads broadcast the first element
    let x = [2.0_f64];
    let y = [1.0, 2.0, 3.0];
    assert_eq!(ddot(3, &x, 0, &y, 1).unwrap(), 12.0);

    // writes reject it
    let mut out = [0.0_f64; 3];
    let err = daxpy(3, 1.0, &y, 1, &mut out, 0).unwrap_err();
    assert_eq!(err, BlasError::ZeroIncrement { arg: "y" });
    assert_eq!(out, [0.0; 3]);
}

#[test]
fn test_short_buffer_and_packed_length() {
    let mut x = [1.0_f32; 4];
    let err = sscal(3, 2.0, &mut x, 2).unwrap_err();
    assert!(matches!(err, BlasError::BufferTooShort { arg: "x", len: 4, required: 5 }));
    assert_eq!(x, [1.0; 4]);

    let ap = [1.0_f64; 5];
    let mut v = [1.0_f64; 3];
    let err = dtpmv(Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 3, &ap, &mut v, 1).unwrap_err();
    assert!(matches!(err, BlasError::PackedLength { expected: 6, .. }));
}

#[test]
fn test_empty_calls_are_no_ops() {
    let mut y: [f64; 0] = [];
    dgemv(Transpose::NoTrans, 0, 0, 1.0, &[], 1, &[], 1, 0.0, &mut y, 1).unwrap();
    let mut c: [Complex32; 0] = [];
    cgemm(
        Transpose::NoTrans,
        Transpose::NoTrans,
        0,
        0,
        5,
        Complex32::new(1.0, 0.0),
        &[],
        1,
        &[],
        5,
        Complex32::new(0.0, 0.0),
        &mut c,
        1,
    )
    .unwrap();
    // leading dimensions are still checked
    assert!(dgemv(Transpose::NoTrans, 3, 0, 1.0, &[], 2, &[], 1, 0.0, &mut y, 1).is_err());
}
