//! Plotting collaborator: renders plot-ready, overlap-resolved curves.
//!
//! The arrays arriving here are already scaled and offset by the library's
//! scaling engine; this module only draws. Energy values on the vertical
//! axis are relabeled by the scale factor so ticks read in raw atomic
//! units.

use ndarray as nd;
use plotters::prelude::*;
use qwell::scaling::ScaledPlotData;

fn min_max<'a, I>(values: I) -> (f64, f64)
where I: IntoIterator<Item = &'a f64>
{
    values.into_iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}

/// Render one case to a PNG file.
///
/// `energies` is the full ascending energy array; only the first
/// `plot.display_count` entries are drawn.
pub fn render(
    path: &str,
    title: &str,
    x: &nd::Array1<f64>,
    plot: &ScaledPlotData,
    energies: &nd::Array1<f64>,
) -> anyhow::Result<()> {
    let n_draw = plot.display_count;
    let s = plot.scale_factor;

    let (u_lo, u_hi) = min_max(plot.potential.iter());
    let (c_lo, c_hi) = min_max(plot.curves.iter());
    let y_lo = 1.05 * u_lo.min(c_lo);
    let y_hi = c_hi.max(u_hi) + 0.05 * u_lo.abs().max(1.0);
    let x_lo = x[0];
    let x_hi = x[x.len() - 1];

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Width / (a.u.)")
        .y_desc("Energy / (a.u.)")
        .y_label_formatter(&|y| format!("{:.0}", y * s))
        .draw()?;

    // the potential itself
    chart
        .draw_series(LineSeries::new(
            x.iter().zip(plot.potential.iter()).map(|(&xk, &uk)| (xk, uk)),
            &BLACK,
        ))?
        .label("V(x)")
        .legend(|(lx, ly)| {
            PathElement::new(vec![(lx, ly), (lx + 20, ly)], BLACK.stroke_width(1))
        });

    // offset wavefunction curves, top state first
    for j in (0..n_draw).rev() {
        let hue = 0.667 * j as f64 / n_draw.max(1) as f64;
        let color = HSLColor(hue, 0.9, 0.4);
        let baseline = plot.curves[[0, j]];
        chart.draw_series(LineSeries::new(
            [(x_lo, baseline), (x_hi, baseline)],
            color.mix(0.4).stroke_width(1),
        ))?;
        chart
            .draw_series(LineSeries::new(
                x.iter()
                    .zip(plot.curves.column(j))
                    .map(|(&xk, &vk)| (xk, vk)),
                &color,
            ))?
            .label(format!("E(a.u.)={:.3}", energies[j]))
            .legend(move |(lx, ly)| {
                PathElement::new(
                    vec![(lx, ly), (lx + 20, ly)],
                    color.stroke_width(1),
                )
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
