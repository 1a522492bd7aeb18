//! Writes a synthetic wildfire dataset to `wildlife_fire_project.csv` so the
//! dashboard runs out of the box. Deterministic: same seed, same file.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn next_range(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// NWCG fire size classes by burned acres.
fn size_class(fire_size: f64) -> &'static str {
    match fire_size {
        s if s < 0.25 => "A",
        s if s < 10.0 => "B",
        s if s < 100.0 => "C",
        s if s < 300.0 => "D",
        s if s < 1000.0 => "E",
        s if s < 5000.0 => "F",
        _ => "G",
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (state, longitude centre, latitude centre)
    let states = [
        ("CA", -119.5, 37.2),
        ("TX", -99.9, 31.0),
        ("OR", -120.5, 43.8),
        ("AZ", -111.7, 34.3),
        ("CO", -105.5, 39.0),
    ];
    let years = 2010..=2018;

    let output_path = "wildlife_fire_project.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "discovery_year",
            "state",
            "fire_size",
            "fire_size_class",
            "longitude",
            "latitude",
            "discovery_month",
            "Temp_cont",
            "Wind_cont",
            "Hum_cont",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for year in years {
        for _ in 0..60 {
            let (state, lon0, lat0) = states[rng.next_range(states.len())];
            // Fire season weighting: most discoveries in May–September.
            let month = 1 + ((4.0 + rng.gauss(2.0, 2.0)).clamp(0.0, 11.0) as u32);
            let fire_size = rng.gauss(1.5, 1.8).exp().max(0.01);
            let temp = rng.gauss(12.0 + 2.2 * month as f64, 4.0);
            let wind = rng.gauss(4.0, 1.5).max(0.0);
            let hum = rng.gauss(45.0 - temp / 2.0, 10.0).clamp(2.0, 98.0);

            // Weather covariates are nullable in the real dataset.
            let fmt_opt = |v: f64, present: bool| {
                if present { format!("{v:.2}") } else { String::new() }
            };

            writer
                .write_record([
                    year.to_string(),
                    state.to_string(),
                    format!("{fire_size:.2}"),
                    size_class(fire_size).to_string(),
                    format!("{:.4}", lon0 + rng.gauss(0.0, 1.5)),
                    format!("{:.4}", lat0 + rng.gauss(0.0, 1.0)),
                    month.to_string(),
                    fmt_opt(temp, rng.next_f64() > 0.05),
                    fmt_opt(wind, rng.next_f64() > 0.05),
                    fmt_opt(hum, rng.next_f64() > 0.05),
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {rows} fire records to {output_path}");
}
