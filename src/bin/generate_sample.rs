use anyhow::{Context, Result};

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const YEARS: [i64; 5] = [2021, 2022, 2023, 2024, 2025];
const SENIORITY: [(&str, f64); 4] = [
    ("junior", 0.6),
    ("pleno", 0.9),
    ("senior", 1.2),
    ("executivo", 1.6),
];
const CONTRACTS: [&str; 4] = ["integral", "parcial", "contrato", "freelancer"];
const SIZES: [&str; 3] = ["pequena", "media", "grande"];
const REMOTE: [&str; 3] = ["presencial", "hibrido", "remoto"];
const TITLES: [(&str, f64); 6] = [
    ("Data Scientist", 140_000.0),
    ("Data Engineer", 135_000.0),
    ("Data Analyst", 95_000.0),
    ("Machine Learning Engineer", 160_000.0),
    ("Analytics Engineer", 120_000.0),
    ("Research Scientist", 170_000.0),
];
/// (alpha-2, alpha-3, currency, salary factor)
const COUNTRIES: [(&str, &str, &str, f64); 6] = [
    ("US", "USA", "USD", 1.0),
    ("GB", "GBR", "GBP", 0.7),
    ("DE", "DEU", "EUR", 0.65),
    ("BR", "BRA", "BRL", 0.3),
    ("IN", "IND", "INR", 0.25),
    ("CA", "CAN", "CAD", 0.8),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_salaries.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "ano",
        "senioridade",
        "contrato",
        "cargo",
        "salario",
        "moeda",
        "usd",
        "residencia",
        "remoto",
        "empresa",
        "tamanho_empresa",
        "residencia_iso3",
    ])?;

    let rows = 2_000;
    for _ in 0..rows {
        let year = *rng.pick(&YEARS);
        let &(seniority, level) = rng.pick(&SENIORITY);
        let &(title, base) = rng.pick(&TITLES);
        let &(alpha2, alpha3, currency, factor) = rng.pick(&COUNTRIES);
        let noise = 0.8 + 0.4 * rng.next_f64();
        let usd = (base * level * factor * noise).round();

        writer.write_record([
            year.to_string(),
            seniority.to_string(),
            rng.pick(&CONTRACTS).to_string(),
            title.to_string(),
            usd.to_string(),
            currency.to_string(),
            usd.to_string(),
            alpha2.to_string(),
            rng.pick(&REMOTE).to_string(),
            alpha2.to_string(),
            rng.pick(&SIZES).to_string(),
            alpha3.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} salary records to {output_path}");
    Ok(())
}
