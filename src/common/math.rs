//! Small numeric building blocks used by the indicator library.

/// True range of a bar given the previous session's close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let range = (high - low).abs();
    let gap_up = (high - prev_close).abs();
    let gap_down = (low - prev_close).abs();
    range.max(gap_up).max(gap_down)
}

/// Arithmetic mean of a window. `None` for an empty window.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average over a series with undefined leading values.
///
/// A window produces a value only when every element in it is defined.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, 0, mean)
}

/// Rolling maximum over `window` trailing values, looking back `shift` bars.
pub fn rolling_max(values: &[f64], window: usize, shift: usize) -> Vec<Option<f64>> {
    let defined: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    rolling(&defined, window, shift, |w| w.iter().copied().reduce(f64::max))
}

/// Rolling minimum over `window` trailing values, looking back `shift` bars.
pub fn rolling_min(values: &[f64], window: usize, shift: usize) -> Vec<Option<f64>> {
    let defined: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    rolling(&defined, window, shift, |w| w.iter().copied().reduce(f64::min))
}

/// Last defined value of an indicator series, if the final slot is defined.
pub fn last_defined(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten().filter(|v| v.is_finite())
}

fn rolling<F>(values: &[Option<f64>], window: usize, shift: usize, reduce: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }

    let mut buffer = Vec::with_capacity(window);
    for (i, slot) in out.iter_mut().enumerate() {
        // window ends `shift` bars before the evaluated bar
        let Some(end) = i.checked_sub(shift) else {
            continue;
        };
        let Some(start) = (end + 1).checked_sub(window) else {
            continue;
        };

        buffer.clear();
        let complete = values[start..=end].iter().all(|v| match v {
            Some(x) => {
                buffer.push(*x);
                true
            }
            None => false,
        });
        if complete {
            *slot = reduce(&buffer);
        }
    }
    out
}
