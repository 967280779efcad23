//! Optimal-Ate pairing on BN256.
//!
//! Line functions follow "Faster Computation of the Tate Pairing" (Costello,
//! Lange, Naehrig), with the running twist point kept in Jacobian coordinates
//! together with T = Z². The final exponentiation is the hard-part chain of
//! "Faster Squaring in the Cyclotomic Subgroup of Sixth Degree Extensions"
//! (Granger, Scott) specialized to u.

use super::constants::{
    BN_U, SIX_U_PLUS_2_NAF, XI_TO_P_MINUS_1_OVER_2, XI_TO_P_MINUS_1_OVER_3,
    XI_TO_P_SQUARED_MINUS_1_OVER_3,
};
use super::field::{Fp2, Fp6, Fp12};
use super::g1::G1Projective;
use super::g2::G2Projective;

/// Coefficients (a, b, c) of a line evaluated at a G₁ point, paired with the
/// updated running point.
pub type LineEvaluation = (Fp2, Fp2, Fp2, G2Projective);

/// Line through r and the affine twist point p, evaluated at the affine G₁
/// point q; r2 = p.y².
pub fn line_function_add(
    r: &G2Projective,
    p: &G2Projective,
    q: &G1Projective,
    r2: &Fp2,
) -> LineEvaluation {
    // See the mixed addition in section 3.3 of the paper above.
    let b = p.x * r.t;
    let d = ((p.y + r.z).square() - r2 - r.t) * r.t;

    let h = b - r.x;
    let i = h.square();
    let e = i.double().double();
    let j = h * e;

    let l1 = d - r.y.double();
    let v = r.x * e;

    let x = l1.square() - j - v.double();
    let z = (r.z + h).square() - r.t - i;
    let y = (v - x) * l1 - (r.y * j).double();
    let t = z.square();

    let out = G2Projective { x, y, z, t };

    let t = (p.y + z).square() - r2 - t;
    let a = (l1 * p.x).double() - t;
    let c = z.mul_by_fp(&q.y).double();
    let b = (-l1).mul_by_fp(&q.x).double();

    (a, b, c, out)
}

/// Tangent at r evaluated at the affine G₁ point q.
pub fn line_function_double(r: &G2Projective, q: &G1Projective) -> LineEvaluation {
    // See the doubling in section 3.2 of the paper above.
    let a = r.x.square();
    let b = r.y.square();
    let c = b.square();

    let d = ((r.x + b).square() - a - c).double();
    let e = a.double() + a;
    let g = e.square();

    let x = g - d.double();
    let z = (r.y + r.z).square() - b - r.t;
    let y = (d - x) * e - c.double().double().double();
    let t = z.square();

    let out = G2Projective { x, y, z, t };

    let line_b = (-(e * r.t).double()).mul_by_fp(&q.x);
    let line_a = (r.x + e).square() - a - g - b.double().double();
    let line_c = (z * r.t).double().mul_by_fp(&q.y);

    (line_a, line_b, line_c, out)
}

/// Multiply an accumulator by the sparse line element (a·τ + b) + c·ω.
pub fn mul_line(ret: &Fp12, a: &Fp2, b: &Fp2, c: &Fp2) -> Fp12 {
    let a2 = Fp6 {
        c0: *b,
        c1: *a,
        c2: Fp2::zero(),
    } * ret.c1;
    let t3 = ret.c0.mul_by_fp2(c);

    let t2 = Fp6 {
        c0: b + c,
        c1: *a,
        c2: Fp2::zero(),
    };

    Fp12 {
        c0: t3 + a2.mul_by_tau(),
        c1: (ret.c1 + ret.c0) * t2 - a2 - t3,
    }
}

/// Miller loop over the NAF of 6u + 2 followed by the two Frobenius-twisted
/// additions. Either input at infinity yields one.
pub fn miller_loop(q: &G2Projective, p: &G1Projective) -> Fp12 {
    let _span = tracing::debug_span!("miller_loop").entered();

    if bool::from(q.is_identity() | p.is_identity()) {
        return Fp12::one();
    }

    let q_affine = q.to_affine();
    let p_affine = p.to_affine();
    let minus_q = G2Projective::from_affine_unchecked(q_affine.x, -q_affine.y);

    let mut ret = Fp12::one();
    let mut r = q_affine;
    let r2 = q_affine.y.square();

    for i in (1..SIX_U_PLUS_2_NAF.len()).rev() {
        let (a, b, c, next) = line_function_double(&r, &p_affine);
        if i != SIX_U_PLUS_2_NAF.len() - 1 {
            ret = ret.square();
        }
        ret = mul_line(&ret, &a, &b, &c);
        r = next;

        let addend = match SIX_U_PLUS_2_NAF[i - 1] {
            1 => &q_affine,
            -1 => &minus_q,
            _ => continue,
        };

        let (a, b, c, next) = line_function_add(&r, addend, &p_affine, &r2);
        ret = mul_line(&ret, &a, &b, &c);
        r = next;
    }

    // Q1 = π(Q) and −Q2 = −π²(Q) on the twist.
    let q1 = G2Projective::from_affine_unchecked(
        q_affine.x.conjugate() * XI_TO_P_MINUS_1_OVER_3,
        q_affine.y.conjugate() * XI_TO_P_MINUS_1_OVER_2,
    );
    let minus_q2 = G2Projective::from_affine_unchecked(
        q_affine.x.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        q_affine.y,
    );

    for addend in [q1, minus_q2].iter() {
        let r2 = addend.y.square();
        let (a, b, c, next) = line_function_add(&r, addend, &p_affine, &r2);
        ret = mul_line(&ret, &a, &b, &c);
        r = next;
    }

    ret
}

/// Raise a Miller loop output to (p¹² − 1)/n.
pub fn final_exponentiation(x: &Fp12) -> Fp12 {
    let _span = tracing::debug_span!("final_exponentiation").entered();

    // Easy part: (p⁶ − 1)(p² + 1).
    let inv = Option::<Fp12>::from(x.invert()).unwrap_or_else(Fp12::zero);
    let mut t1 = x.conjugate() * inv;
    t1 = t1.frobenius_p2() * t1;

    // Hard part.
    let fp = t1.frobenius();
    let fp2 = t1.frobenius_p2();
    let fp3 = fp2.frobenius();

    let fu = t1.pow_vartime(&[BN_U]);
    let fu2 = fu.pow_vartime(&[BN_U]);
    let fu3 = fu2.pow_vartime(&[BN_U]);

    let fu2p = fu2.frobenius();
    let fu3p = fu3.frobenius();

    let y0 = fp * fp2 * fp3;
    let y1 = t1.conjugate();
    let y2 = fu2.frobenius_p2();
    let y3 = fu.frobenius().conjugate();
    let y4 = (fu * fu2p).conjugate();
    let y5 = fu2.conjugate();
    let y6 = (fu3 * fu3p).conjugate();

    let mut t0 = y6.square() * y4 * y5;
    let mut t1 = y3 * y5 * t0;
    t0 *= y2;
    t1 = (t1.square() * t0).square();
    t0 = t1 * y1;
    t1 *= y0;
    t0.square() * t1
}

/// The optimal-Ate pairing e(p, q); one when either input is at infinity.
pub fn optimal_ate(q: &G2Projective, p: &G1Projective) -> Fp12 {
    final_exponentiation(&miller_loop(q, p))
}
