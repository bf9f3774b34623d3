/// Writes a deterministic synthetic launch-records table so the dashboard
/// can run without the production dataset.
const OUTPUT_PATH: &str = "launch_records.csv";

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

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const SITES: [&str; 4] = [
    "CCAFS LC-40",
    "VAFB SLC-4E",
    "KSC LC-39A",
    "CCAFS SLC-40",
];

/// One booster generation: raw-label prefix, first serial number, payload
/// band in kg, success probability, and how many flights to emit.
struct Family {
    prefix: &'static str,
    first_serial: u32,
    payload_band: (f64, f64),
    success_rate: f64,
    flights: u32,
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let families = [
        Family {
            prefix: "F9 v1.0",
            first_serial: 3,
            payload_band: (300.0, 3200.0),
            success_rate: 0.4,
            flights: 5,
        },
        Family {
            prefix: "F9 v1.1",
            first_serial: 1010,
            payload_band: (2200.0, 5000.0),
            success_rate: 0.55,
            flights: 10,
        },
        Family {
            prefix: "F9 FT",
            first_serial: 1019,
            payload_band: (2200.0, 9600.0),
            success_rate: 0.75,
            flights: 20,
        },
        Family {
            prefix: "F9 B4",
            first_serial: 1039,
            payload_band: (3000.0, 9600.0),
            success_rate: 0.85,
            flights: 8,
        },
        Family {
            prefix: "F9 B5",
            first_serial: 1046,
            payload_band: (2000.0, 13600.0),
            success_rate: 0.95,
            flights: 13,
        },
    ];

    let mut writer = csv::Writer::from_path(OUTPUT_PATH).expect("Failed to create output file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version",
        ])
        .expect("Failed to write header");

    let mut flight_no: u32 = 0;
    for family in &families {
        for i in 0..family.flights {
            flight_no += 1;

            let site = rng.pick(&SITES);
            let (lo, hi) = family.payload_band;
            let payload = lo + (hi - lo) * rng.next_f64();
            let class = if rng.next_f64() < family.success_rate { 1 } else { 0 };
            let label = format!("{} B{:04}", family.prefix, family.first_serial + i);

            writer
                .write_record(&[
                    flight_no.to_string(),
                    site.to_string(),
                    class.to_string(),
                    format!("{payload:.1}"),
                    label,
                ])
                .expect("Failed to write row");
        }
    }
    writer.flush().expect("Failed to flush CSV");

    println!("Wrote {flight_no} launch records to {OUTPUT_PATH}");
}
