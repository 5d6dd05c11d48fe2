//! Cell-by-cell crossfade between ASCII frames, used for the hero banner.

/// Fraction of the timeline a single cell spends showing noise.
const BAND: f64 = 0.15;
const NOISE: [char; 3] = ['░', '▒', '▓'];

pub const MONOGRAM: &str = "╔═╗ ╦╔═\n╠═╣ ╠╩╗\n╩ ╩ ╩ ╩";

pub const INITIALS: &str = "A   K\nA A K K\nA A K  K";

/// Stable pseudo-random value in `[0, 1)` for a cell, so every run morphs the same way.
fn cell_threshold(row: usize, col: usize) -> f64 {
    let mut h = (row as u32).wrapping_mul(0x9E37_79B1) ^ (col as u32).wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0xC2B2_AE3D);
    h ^= h >> 13;
    f64::from(h % 1000) / 1000.0
}

fn cell(from: char, to: char, threshold: f64, progress: f64) -> char {
    if from == to {
        return to;
    }
    let start = threshold * (1.0 - BAND);
    if progress <= start {
        from
    } else if progress >= start + BAND {
        to
    } else {
        let phase = (progress - start) / BAND;
        let i = ((phase * NOISE.len() as f64) as usize).min(NOISE.len() - 1);
        NOISE[i]
    }
}

/// Blends `from` into `to` at `progress` (clamped to `[0, 1]`).
///
/// Frames are padded with spaces to a common shape first. Trailing spaces are trimmed from
/// each output line.
pub fn morph(from: &str, to: &str, progress: f64) -> String {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let from_lines = from.lines().collect::<Vec<_>>();
    let to_lines = to.lines().collect::<Vec<_>>();
    let rows = from_lines.len().max(to_lines.len());

    (0..rows)
        .map(|row| {
            let a = from_lines.get(row).copied().unwrap_or("").chars().collect::<Vec<_>>();
            let b = to_lines.get(row).copied().unwrap_or("").chars().collect::<Vec<_>>();
            let width = a.len().max(b.len());
            let line = (0..width)
                .map(|col| {
                    let x = a.get(col).copied().unwrap_or(' ');
                    let y = b.get(col).copied().unwrap_or(' ');
                    cell(x, y, cell_threshold(row, col), progress)
                })
                .collect::<String>();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Triangle wave over animation ticks: rests at 0 for `hold` ticks, rises over `steps`,
/// rests at 1, then falls back.
pub fn ping_pong(tick: u32, steps: u32, hold: u32) -> f64 {
    let steps = steps.max(1);
    let period = 2 * (steps + hold);
    let t = tick % period;
    let step = if t < hold {
        0
    } else if t < hold + steps {
        t - hold
    } else if t < 2 * hold + steps {
        steps
    } else {
        steps - (t - 2 * hold - steps)
    };
    f64::from(step) / f64::from(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(morph(MONOGRAM, INITIALS, 0.0), MONOGRAM);
        assert_eq!(morph(MONOGRAM, INITIALS, 1.0), INITIALS.trim_end());
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(morph(MONOGRAM, INITIALS, -2.0), MONOGRAM);
        assert_eq!(morph(MONOGRAM, INITIALS, 7.5), morph(MONOGRAM, INITIALS, 1.0));
        assert_eq!(morph(MONOGRAM, INITIALS, f64::NAN), MONOGRAM);
    }

    #[test]
    fn test_midway_mixes_frames() {
        let from = "#".repeat(40);
        let to = "=".repeat(40);
        let mid = morph(&from, &to, 0.5);
        assert_eq!(mid.chars().count(), 40);
        assert!(mid.chars().any(|c| c != '#'));
        assert!(mid.chars().any(|c| c != '='));
        assert!(mid
            .chars()
            .all(|c| c == '#' || c == '=' || NOISE.contains(&c)));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            morph(MONOGRAM, INITIALS, 0.37),
            morph(MONOGRAM, INITIALS, 0.37)
        );
    }

    #[test]
    fn test_uneven_frames_are_padded() {
        assert_eq!(morph("ab", "abcd\nxy", 0.0), "ab\n");
        assert_eq!(morph("ab", "abcd\nxy", 1.0), "abcd\nxy");
    }

    #[test]
    fn test_ping_pong() {
        let wave = (0..13).map(|t| ping_pong(t, 4, 2)).collect::<Vec<_>>();
        assert_eq!(
            wave,
            vec![0.0, 0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 1.0, 0.75, 0.5, 0.25, 0.0]
        );
        // zero steps doesn't divide by zero
        assert!(ping_pong(5, 0, 0).is_finite());
    }
}
