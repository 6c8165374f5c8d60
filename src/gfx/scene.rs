use std::sync::LazyLock;

use rand::Rng;
use three_d::{
    AmbientLight, Attenuation, Blend, ColorMaterial, Context, CpuMaterial, CpuMesh, Gm,
    InstancedMesh, Instances, Light, Mat4, Mesh, Object, PhysicalMaterial, PointLight,
    RenderStates, Srgba, WriteMask, radians, vec3,
};

use super::{GlowClock, get_matrix, orbit_points, star_positions, to_vec3};
use crate::sim::SimState;

const SPHERE_SUBDIVS: u32 = 32;
const DOT_SUBDIVS: u32 = 3;
const POINTS_PER_ORBIT: usize = 256;
const ORBIT_DOT_RADIUS: f64 = 0.04;
const STAR_RADIUS: f64 = 0.25;

const ORBIT_COLOR: Srgba = Srgba {
    r: 0x44,
    g: 0x44,
    b: 0x44,
    a: 0xff,
};
const GLOW_COLOR: Srgba = Srgba {
    r: 0xff,
    g: 0xd2,
    b: 0x50,
    a: 0x30,
};

static SPHERE_MESH: LazyLock<CpuMesh> = LazyLock::new(|| CpuMesh::sphere(SPHERE_SUBDIVS));
static DOT_MESH: LazyLock<CpuMesh> = LazyLock::new(|| CpuMesh::sphere(DOT_SUBDIVS));

/// The GPU side of the solar system.
pub(crate) struct SceneObjects {
    sun: Gm<Mesh, ColorMaterial>,
    glow: Gm<Mesh, ColorMaterial>,
    planets: Box<[Gm<Mesh, PhysicalMaterial>]>,
    orbits: Gm<InstancedMesh, ColorMaterial>,
    stars: Gm<InstancedMesh, ColorMaterial>,
    ambient_light: AmbientLight,
    sun_light: PointLight,
    glow_clock: GlowClock,
}

fn unlit(color: Srgba) -> ColorMaterial {
    ColorMaterial {
        color,
        texture: None,
        render_states: RenderStates::default(),
        is_transparent: false,
    }
}

fn new_dots(context: &Context, matrices: Vec<Mat4>, color: Srgba) -> Gm<InstancedMesh, ColorMaterial> {
    let count = matrices.len();
    let instances = Instances {
        transformations: matrices,
        colors: Some(vec![color; count]),
        texture_transformations: None,
    };
    Gm::new(
        InstancedMesh::new(context, &instances, &DOT_MESH),
        unlit(Srgba::WHITE),
    )
}

impl SceneObjects {
    pub(crate) fn new(
        context: &Context,
        sim: &SimState,
        star_count: usize,
        rng: &mut impl Rng,
    ) -> Self {
        let sun_body = sim.sun();
        let mut sun = Gm::new(Mesh::new(context, &SPHERE_MESH), unlit(sun_body.color));
        sun.geometry
            .set_transformation(Mat4::from_scale(sun_body.radius as f32));

        let glow = Gm::new(
            Mesh::new(context, &SPHERE_MESH),
            ColorMaterial {
                color: GLOW_COLOR,
                texture: None,
                render_states: RenderStates {
                    write_mask: WriteMask::COLOR,
                    blend: Blend::TRANSPARENCY,
                    ..Default::default()
                },
                is_transparent: true,
            },
        );

        let planets = sim
            .bodies()
            .iter()
            .map(|body| {
                let material = PhysicalMaterial::new_opaque(
                    context,
                    &CpuMaterial {
                        albedo: body.color,
                        ..Default::default()
                    },
                );
                Gm::new(Mesh::new(context, &SPHERE_MESH), material)
            })
            .collect();

        let orbit_dots = sim
            .bodies()
            .iter()
            .flat_map(|body| orbit_points(body.orbital_distance, POINTS_PER_ORBIT))
            .map(|p| get_matrix(p, ORBIT_DOT_RADIUS))
            .collect();

        let star_dots = star_positions(star_count, rng)
            .into_iter()
            .map(|p| get_matrix(p, STAR_RADIUS))
            .collect();

        let mut scene = Self {
            sun,
            glow,
            planets,
            orbits: new_dots(context, orbit_dots, ORBIT_COLOR),
            stars: new_dots(context, star_dots, Srgba::WHITE),
            ambient_light: AmbientLight::new(context, 0.2, Srgba::WHITE),
            sun_light: PointLight::new(
                context,
                2.0,
                Srgba::WHITE,
                vec3(0.0, 0.0, 0.0),
                Attenuation {
                    constant: 1.0,
                    linear: 0.0,
                    quadratic: 0.0,
                },
            ),
            glow_clock: GlowClock::default(),
        };
        scene.update(sim, 0.0);
        scene
    }

    /// Moves the planets to their current positions and advances the glow pulse.
    pub(crate) fn update(&mut self, sim: &SimState, elapsed_secs: f64) {
        self.glow_clock
            .advance(sim.animator.is_paused(), elapsed_secs);
        let glow_radius = self.glow_clock.scale() * 0.5;
        self.glow
            .geometry
            .set_transformation(Mat4::from_scale(glow_radius as f32));

        for (index, (planet, body)) in self.planets.iter_mut().zip(sim.bodies()).enumerate() {
            let (Some(position), Some(spin)) =
                (sim.animator.position(index), sim.animator.spin(index))
            else {
                continue;
            };
            let transformation = Mat4::from_translation(to_vec3(position))
                * Mat4::from_angle_y(radians(spin as f32))
                * Mat4::from_scale(body.radius as f32);
            planet.geometry.set_transformation(transformation);
        }
    }

    /// Everything to draw, opaque objects first.
    pub(crate) fn objects(&self) -> impl Iterator<Item = &dyn Object> {
        [
            &self.stars as &dyn Object,
            &self.orbits as &dyn Object,
            &self.sun as &dyn Object,
        ]
        .into_iter()
        .chain(self.planets.iter().map(|p| p as &dyn Object))
        .chain(std::iter::once(&self.glow as &dyn Object))
    }

    pub(crate) fn lights(&self) -> [&dyn Light; 2] {
        [&self.ambient_light, &self.sun_light]
    }
}
