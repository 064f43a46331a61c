use super::error::{ModelError, Result};

/// Reference data of a three-point model, ordered by electron count.
///
/// `minus`, `zero` and `plus` hold the values at `n0 - 1`, `n0` and `n0 + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTriple<T> {
    pub n0: f64,
    pub minus: T,
    pub zero: T,
    pub plus: T,
}

/// Validates `(electron count, value)` pairs for a three-point model.
///
/// Exactly three entries are required, and their sorted electron counts must be
/// `[n0 - 1, n0, n0 + 1]` where `n0` is the middle count.
///
/// # Errors
///
/// Returns [`ModelError::InvalidModelInput`] on a wrong number of entries, a
/// non-finite electron count, or counts that do not differ by exactly one.
pub fn validate_triple<T, I>(points: I) -> Result<ReferenceTriple<T>>
where
    I: IntoIterator<Item = (f64, T)>,
{
    let mut points: Vec<(f64, T)> = points.into_iter().collect();
    if points.len() != 3 {
        return Err(ModelError::invalid_input(format!(
            "Linear model requires exactly 3 values at consecutive numbers of electrons, got {}!",
            points.len()
        )));
    }
    if let Some((n, _)) = points.iter().find(|(n, _)| !n.is_finite()) {
        return Err(ModelError::invalid_input(format!(
            "Number of electrons should be a finite number! n_elec={n}"
        )));
    }

    points.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    let n0 = points[1].0;
    let keys = [points[0].0, points[1].0, points[2].0];
    if keys != [n0 - 1.0, n0, n0 + 1.0] {
        return Err(ModelError::invalid_input(format!(
            "Number of electrons should differ by one! Given {keys:?}"
        )));
    }

    let mut values = points.into_iter().map(|(_, value)| value);
    match (values.next(), values.next(), values.next()) {
        (Some(minus), Some(zero), Some(plus)) => Ok(ReferenceTriple {
            n0,
            minus,
            zero,
            plus,
        }),
        _ => Err(ModelError::invalid_input(
            "Linear model requires exactly 3 values!",
        )),
    }
}

/// Validates a triple of physical reference states: on top of
/// [`validate_triple`], every electron count must be non-negative and the
/// reference count at least one.
pub fn validate_physical_triple<T, I>(points: I) -> Result<ReferenceTriple<T>>
where
    I: IntoIterator<Item = (f64, T)>,
{
    let points: Vec<(f64, T)> = points.into_iter().collect();
    if points.len() != 3 || points.iter().any(|(n, _)| *n < 0.0) {
        return Err(ModelError::invalid_input(
            "Linear model requires 3 values corresponding to positive number of electrons!",
        ));
    }
    let triple = validate_triple(points)?;
    if triple.n0 < 1.0 {
        return Err(ModelError::invalid_input(format!(
            "Reference number of electrons cannot be less than one! Given n0={}",
            triple.n0
        )));
    }
    Ok(triple)
}
