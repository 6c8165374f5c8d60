use three_d::Srgba;

/// A struct representing a planet orbiting the sun.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// The name of the planet, shown in tooltips and slider labels.
    pub name: String,

    /// The color of the planet.
    pub color: Srgba,

    /// The visual radius of the planet, in scene units.
    ///
    /// This is also the radius of the sphere used for picking.
    pub radius: f64,

    /// The radius of the (circular) orbit around the origin, in scene units.
    pub orbital_distance: f64,

    /// The default angular speed, in radians per frame.
    pub base_angular_speed: f64,
}

impl Body {
    /// Creates a new `Body` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the planet.
    /// * `color` - The color of the planet, as a `0xRRGGBB` hex value.
    /// * `radius` - The visual radius of the planet.
    /// * `orbital_distance` - The distance from the sun.
    /// * `base_angular_speed` - The default orbital speed, in radians per frame.
    pub fn new(
        name: impl Into<String>,
        color: u32,
        radius: f64,
        orbital_distance: f64,
        base_angular_speed: f64,
    ) -> Self {
        Self {
            name: name.into(),
            color: srgba_from_hex(color),
            radius,
            orbital_distance,
            base_angular_speed,
        }
    }
}

/// The star in the middle of the system. It never moves and cannot be picked.
#[derive(Clone, Debug, PartialEq)]
pub struct Sun {
    pub radius: f64,
    pub color: Srgba,
}

impl Default for Sun {
    fn default() -> Self {
        Self {
            radius: 2.5,
            color: srgba_from_hex(0xffcc00),
        }
    }
}

pub fn srgba_from_hex(hex: u32) -> Srgba {
    Srgba::new_opaque((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
