use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::constants::{CHART_HEIGHT, CHART_WIDTH, THEORETICAL_CURVE_POINTS};
use crate::engine::trajectory::Trajectory;
use crate::errors::SimulationError;
use crate::physics::kinematics::FreeFallModel;

// Sample series color carried over from the simulator's original web UI.
const SAMPLE_COLOR: RGBColor = RGBColor(253, 187, 45);

/// Renders the position-vs-time chart for a completed run: the recorded
/// samples as a solid line with point markers, overlaid with the model's
/// theoretical curve on a dense uniform time grid.
pub fn render_chart(
    trajectory: &Trajectory,
    model: &FreeFallModel,
    output: &Path,
) -> Result<(), SimulationError> {
    if trajectory.is_empty() {
        return Err(SimulationError::EmptyTrajectory);
    }

    let max_time = trajectory.max_time();
    let output_str = output
        .to_str()
        .ok_or_else(|| SimulationError::RenderError("output path is not valid UTF-8".into()))?;

    let root = BitMapBackend::new(output_str, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .caption("Free Fall - Position vs Time", caption_font)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_time.max(f64::MIN_POSITIVE), 0.0..model.initial_height())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Height (m)")
        .label_style(label_font)
        .draw()
        .map_err(render_err)?;

    let recorded: Vec<(f64, f64)> = trajectory
        .samples()
        .iter()
        .map(|s| (s.time_seconds, s.height_meters))
        .collect();

    chart
        .draw_series(LineSeries::new(recorded.iter().copied(), SAMPLE_COLOR.stroke_width(2)))
        .map_err(render_err)?
        .label("Recorded samples")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SAMPLE_COLOR.stroke_width(2)));

    chart
        .draw_series(
            recorded
                .iter()
                .map(|&(t, h)| Circle::new((t, h), 3, SAMPLE_COLOR.filled())),
        )
        .map_err(render_err)?;

    let theoretical = theoretical_curve(model, max_time);
    chart
        .draw_series(DashedLineSeries::new(
            theoretical.into_iter(),
            8,
            4,
            BLACK.stroke_width(1),
        ))
        .map_err(render_err)?
        .label("Theoretical curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(1)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Evaluates the model over a uniform grid from 0 to `max_time`.
fn theoretical_curve(model: &FreeFallModel, max_time: f64) -> Vec<(f64, f64)> {
    (0..THEORETICAL_CURVE_POINTS)
        .map(|i| {
            let t = max_time * i as f64 / (THEORETICAL_CURVE_POINTS - 1) as f64;
            (t, model.height_at(t))
        })
        .collect()
}

fn render_err<E: std::fmt::Display>(e: E) -> SimulationError {
    SimulationError::RenderError(e.to_string())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trajectory_is_rejected() {
        let trajectory = Trajectory::new();
        let model = FreeFallModel::new(100.0, 9.8).unwrap();
        let err = render_chart(&trajectory, &model, Path::new("unused.png")).unwrap_err();
        assert!(matches!(err, SimulationError::EmptyTrajectory));
    }

    #[test]
    fn test_theoretical_curve_spans_full_range() {
        let model = FreeFallModel::new(100.0, 9.8).unwrap();
        let curve = theoretical_curve(&model, 4.0);

        assert_eq!(curve.len(), THEORETICAL_CURVE_POINTS);
        assert_eq!(curve.first().unwrap().0, 0.0);
        assert_eq!(curve.last().unwrap().0, 4.0);
        assert_eq!(curve.first().unwrap().1, 100.0);
    }
}
