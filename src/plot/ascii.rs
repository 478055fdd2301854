//! ASCII light-curve plot for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of the input
//! - deterministic output (helpful for golden tests)
//!
//! Magnitude is plotted against time with brighter (lower) magnitudes at the
//! top. Plot elements:
//! - samples: `o`
//! - peak (brightest) sample: `*`
//! - consecutive samples joined in input order: `-`

use crate::domain::Sample;

/// Render the light curve on a `width` x `height` character grid.
pub fn render_light_curve(samples: &[Sample], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let Some((t_min, t_max)) = time_range(samples) else {
        return "Light curve: no samples\n".to_string();
    };
    let Some((m_min, m_max)) = magnitude_range(samples) else {
        return "Light curve: no samples\n".to_string();
    };
    let (m_min, m_max) = pad_range(m_min, m_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Line first so the points overlay it.
    let cells: Vec<(usize, usize)> = samples
        .iter()
        .map(|s| {
            (
                map_x(s.time, t_min, t_max, width),
                map_y(s.magnitude, m_min, m_max, height),
            )
        })
        .collect();
    for pair in cells.windows(2) {
        join_cells(&mut grid, pair[0], pair[1]);
    }

    let peak = peak_index(samples);
    for (idx, &(x, y)) in cells.iter().enumerate() {
        if Some(idx) == peak {
            continue;
        }
        grid[y][x] = 'o';
    }
    // Peak last so it is never hidden.
    if let Some(idx) = peak {
        let (x, y) = cells[idx];
        grid[y][x] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Light curve: time=[{t_min:.3}, {t_max:.3}]s | magnitude=[{m_min:.2}, {m_max:.2}] (brighter up)\n"
    ));

    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    out
}

fn time_range(samples: &[Sample]) -> Option<(f64, f64)> {
    let mut min_t = f64::INFINITY;
    let mut max_t = f64::NEG_INFINITY;
    for s in samples {
        min_t = min_t.min(s.time);
        max_t = max_t.max(s.time);
    }
    if !(min_t.is_finite() && max_t.is_finite()) {
        return None;
    }
    if max_t > min_t {
        Some((min_t, max_t))
    } else {
        Some((min_t - 0.5, max_t + 0.5))
    }
}

fn magnitude_range(samples: &[Sample]) -> Option<(f64, f64)> {
    let mut min_m = f64::INFINITY;
    let mut max_m = f64::NEG_INFINITY;
    for s in samples {
        min_m = min_m.min(s.magnitude);
        max_m = max_m.max(s.magnitude);
    }
    if min_m.is_finite() && max_m.is_finite() {
        Some((min_m, max_m))
    } else {
        None
    }
}

/// Index of the brightest sample; the first one wins on ties.
fn peak_index(samples: &[Sample]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, s) in samples.iter().enumerate() {
        match best {
            Some((_, m)) if s.magnitude >= m => {}
            _ => best = Some((idx, s.magnitude)),
        }
    }
    best.map(|(idx, _)| idx)
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    if span < 1e-12 {
        return (min - 0.5, max + 0.5);
    }
    let pad = span * frac;
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

/// Lower magnitude (brighter) maps to a lower row index.
fn map_y(m: f64, m_min: f64, m_max: f64, height: usize) -> usize {
    let u = ((m - m_min) / (m_max - m_min)).clamp(0.0, 1.0);
    (u * (height as f64 - 1.0)).round() as usize
}

/// Connect two grid cells with `-` (Bresenham), leaving occupied cells alone.
///
/// Both cells come from `map_x`/`map_y`, so every visited cell is in the grid.
fn join_cells(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (mut x, mut y) = (from.0 as isize, from.1 as isize);
    let (x_end, y_end) = (to.0 as isize, to.1 as isize);

    let dx = (x_end - x).abs();
    let dy = -(y_end - y).abs();
    let (step_x, step_y) = ((x_end - x).signum(), (y_end - y).signum());
    let mut err = dx + dy;

    loop {
        let cell = &mut grid[y as usize][x as usize];
        if *cell == ' ' {
            *cell = '-';
        }
        if (x, y) == (x_end, y_end) {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }
}
