use super::body::Body;

/// `(name, color, radius, orbital distance, base angular speed)`
const PLANET_TABLE: [(&str, u32, f64, f64, f64); 8] = [
    ("Mercury", 0xb1b1b1, 0.38, 6.0, 0.04),
    ("Venus", 0xeccc9a, 0.95, 8.0, 0.015),
    ("Earth", 0x2a6aff, 1.0, 10.0, 0.01),
    ("Mars", 0xff6f2a, 0.53, 12.0, 0.008),
    ("Jupiter", 0xf4e2b6, 2.0, 15.0, 0.004),
    ("Saturn", 0xf7e7b6, 1.7, 18.0, 0.003),
    ("Uranus", 0x7defff, 1.4, 21.0, 0.002),
    ("Neptune", 0x4666ff, 1.3, 24.0, 0.0015),
];

/// The eight planets, innermost first.
pub fn planets() -> Box<[Body]> {
    PLANET_TABLE
        .iter()
        .map(|&(name, color, radius, distance, speed)| {
            Body::new(name, color, radius, distance, speed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_are_ordered_outward() {
        let planets = planets();
        assert_eq!(planets.len(), 8);
        assert!(
            planets
                .windows(2)
                .all(|w| w[0].orbital_distance < w[1].orbital_distance)
        );
    }

    #[test]
    fn planet_parameters_are_positive() {
        for body in planets().iter() {
            assert!(body.radius > 0.0, "{} has no radius", body.name);
            assert!(body.orbital_distance > 0.0);
            assert!(body.base_angular_speed > 0.0);
        }
    }

    #[test]
    fn planets_do_not_overlap_the_sun() {
        let sun = super::super::body::Sun::default();
        for body in planets().iter() {
            assert!(body.orbital_distance - body.radius > sun.radius);
        }
    }
}
