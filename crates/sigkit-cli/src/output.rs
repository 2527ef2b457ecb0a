//! Result output formatting and writing.

use crate::orchestrator::DemoResults;
use crate::OutputFormat;
use anyhow::Result;
use lib_types::spectrum::Spectrum;
use lib_types::waveform::SampleBuffer;
use std::io::Write;
use std::path::Path;

/// Write demo results to the output directory.
pub fn write_results(
    results: &DemoResults,
    output_dir: &Path,
    format: OutputFormat,
    waveforms: bool,
    spectra: bool,
) -> Result<()> {
    if waveforms {
        let sine_path = output_dir.join("sine.csv");
        write_waveform_pair(&sine_path, &results.sine, &results.sine_shifted, "sine", "sine_shifted")?;
        tracing::info!("Wrote sine waveforms to {:?}", sine_path);

        // Scaled square has its own length, so it gets its own file.
        let square_path = output_dir.join("square.csv");
        write_waveform(&square_path, &results.square, "square")?;
        let scaled_path = output_dir.join("square_scaled.csv");
        write_waveform(&scaled_path, &results.square_scaled, "square_scaled")?;
        tracing::info!("Wrote square waveforms to {:?} and {:?}", square_path, scaled_path);

        let series_path = output_dir.join("fourier_series.csv");
        let mut f = std::fs::File::create(&series_path)?;
        writeln!(f, "time_s,square,series")?;
        for ((t, q), s) in results.square.iter_timed().zip(results.series.iter()) {
            writeln!(f, "{},{},{}", t, q, s)?;
        }
        tracing::info!("Wrote Fourier series comparison to {:?}", series_path);
    }

    if spectra {
        let spectra_path = output_dir.join("spectra.csv");
        write_spectra(&spectra_path, &results.sine_spectrum, &results.square_spectrum)?;
        tracing::info!("Wrote spectra to {:?}", spectra_path);
    }

    // Write summary
    let summary_path = output_dir.join(match format {
        OutputFormat::Text => "summary.txt",
        OutputFormat::Json => "summary.json",
        OutputFormat::Csv => "summary.csv",
    });
    let mut f = std::fs::File::create(&summary_path)?;

    match format {
        OutputFormat::Text => {
            writeln!(f, "sigkit Demo Summary")?;
            writeln!(f, "===================")?;
            writeln!(f)?;
            writeln!(f, "Samples:              {}", results.sine.len())?;
            writeln!(f, "Sample rate:          {} Hz", results.sine.sample_rate.0)?;
            writeln!(f, "Estimated frequency:  {:.3} Hz", results.sine_frequency_estimate)?;
            writeln!(f, "Scaled square length: {}", results.square_scaled.len())?;
            if let Some((freq, amp)) = results.sine_spectrum.peak() {
                writeln!(f, "Sine peak:            {:.2} Hz @ {:.4}", freq, amp)?;
            }
            if let Some((freq, amp)) = results.square_spectrum.peak() {
                writeln!(f, "Square peak:          {:.2} Hz @ {:.4}", freq, amp)?;
            }
            writeln!(f, "Series MAE:           {:.4}", results.series_error)?;
        }
        OutputFormat::Json => {
            writeln!(f, "{}", serde_json::to_string_pretty(&summary_json(results))?)?;
        }
        OutputFormat::Csv => {
            writeln!(f, "metric,value")?;
            writeln!(f, "samples,{}", results.sine.len())?;
            writeln!(f, "sample_rate_hz,{}", results.sine.sample_rate.0)?;
            writeln!(f, "estimated_frequency_hz,{}", results.sine_frequency_estimate)?;
            writeln!(f, "scaled_square_len,{}", results.square_scaled.len())?;
            writeln!(f, "series_mae,{}", results.series_error)?;
        }
    }

    tracing::info!("Wrote summary to {:?}", summary_path);

    Ok(())
}

fn summary_json(results: &DemoResults) -> serde_json::Value {
    serde_json::json!({
        "samples": results.sine.len(),
        "sample_rate_hz": results.sine.sample_rate.0,
        "estimated_frequency_hz": results.sine_frequency_estimate,
        "scaled_square_len": results.square_scaled.len(),
        "sine_peak": results.sine_spectrum.peak(),
        "square_peak": results.square_spectrum.peak(),
        "series_mae": results.series_error,
    })
}

/// Summary of a single generated waveform in the requested format.
pub fn waveform_summary(buffer: &SampleBuffer, label: &str, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "Generated {} wave:\n  Samples:       {}\n  Duration:      {:.4} s\n  Peak-to-peak:  {:.4}\n  RMS:           {:.4}",
            label,
            buffer.len(),
            buffer.duration().0,
            buffer.peak_to_peak(),
            buffer.rms()
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "shape": label,
            "samples": buffer.len(),
            "sample_rate_hz": buffer.sample_rate.0,
            "duration_s": buffer.duration().0,
            "peak_to_peak": buffer.peak_to_peak(),
            "rms": buffer.rms(),
        }))?,
        OutputFormat::Csv => format!(
            "metric,value\nshape,{}\nsamples,{}\nsample_rate_hz,{}\nduration_s,{}\npeak_to_peak,{}\nrms,{}",
            label,
            buffer.len(),
            buffer.sample_rate.0,
            buffer.duration().0,
            buffer.peak_to_peak(),
            buffer.rms()
        ),
    })
}

/// Write one buffer as `time_s,<label>` rows.
pub fn write_waveform(path: &Path, buffer: &SampleBuffer, label: &str) -> Result<()> {
    let mut f = std::fs::File::create(path)?;
    writeln!(f, "time_s,{}", label)?;
    for (t, v) in buffer.iter_timed() {
        writeln!(f, "{},{}", t, v)?;
    }
    Ok(())
}

fn write_waveform_pair(path: &Path, a: &SampleBuffer, b: &SampleBuffer, label_a: &str, label_b: &str) -> Result<()> {
    let mut f = std::fs::File::create(path)?;
    writeln!(f, "time_s,{},{}", label_a, label_b)?;
    for ((t, va), vb) in a.iter_timed().zip(b.samples.iter()) {
        writeln!(f, "{},{},{}", t, va, vb)?;
    }
    Ok(())
}

fn write_spectra(path: &Path, sine: &Spectrum, square: &Spectrum) -> Result<()> {
    let mut f = std::fs::File::create(path)?;
    writeln!(f, "frequency_hz,sine,square")?;
    for ((freq, a), b) in sine.iter().zip(square.amplitudes.iter()) {
        writeln!(f, "{},{},{}", freq, a, b)?;
    }
    Ok(())
}

/// Print results to stdout.
pub fn print_results(results: &DemoResults) {
    println!("\n=== Demo Results ===\n");

    println!("Waveforms:");
    println!("  Samples:        {}", results.sine.len());
    println!("  Est. frequency: {:.3} Hz", results.sine_frequency_estimate);
    println!("  Shifted sine:   {} samples", results.sine_shifted.len());
    println!("  Scaled square:  {} samples", results.square_scaled.len());

    println!("\nSpectra:");
    for (label, spectrum) in [("Sine", &results.sine_spectrum), ("Square", &results.square_spectrum)] {
        let bins: Vec<String> = spectrum
            .strongest(3)
            .iter()
            .map(|(freq, amp)| format!("{:.1} Hz={:.4}", freq, amp))
            .collect();
        println!("  {:<7} {}", label, bins.join(", "));
    }

    println!("\nFourier series:");
    println!("  Mean abs error: {:.4}", results.series_error);

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::units::Hertz;

    fn square() -> SampleBuffer {
        SampleBuffer::new(vec![0.0, 1.0, 1.0, -1.0, -1.0], Hertz(10.0))
    }

    #[test]
    fn test_waveform_summary_text() {
        let text = waveform_summary(&square(), "square", OutputFormat::Text).unwrap();
        assert!(text.starts_with("Generated square wave:"));
        assert!(text.contains("Samples:       5"));
        assert!(text.contains("Duration:      0.5000 s"));
        assert!(text.contains("Peak-to-peak:  2.0000"));
    }

    #[test]
    fn test_waveform_summary_json() {
        let json = waveform_summary(&square(), "square", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["shape"], "square");
        assert_eq!(value["samples"], 5);
        assert_eq!(value["sample_rate_hz"], 10.0);
        assert_eq!(value["peak_to_peak"], 2.0);
    }

    #[test]
    fn test_waveform_summary_csv() {
        let csv = waveform_summary(&square(), "sine", OutputFormat::Csv).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows[0], "metric,value");
        assert_eq!(rows[1], "shape,sine");
        assert_eq!(rows[2], "samples,5");
        assert!(rows.iter().all(|row| row.split(',').count() == 2));
    }
}
