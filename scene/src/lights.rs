//! Scene lighting and the Lambert shading used by the renderer.

#[cfg(test)]
#[path = "lights_test.rs"]
mod lights_test;

use crate::consts::{
    AMBIENT_COLOR, AMBIENT_INTENSITY, DIRECTIONAL_COLOR, DIRECTIONAL_INTENSITY, DIRECTIONAL_POSITION,
    HEMISPHERE_GROUND, HEMISPHERE_INTENSITY, HEMISPHERE_POSITION, HEMISPHERE_SKY, SHADOW_MAP_SIZE,
};
use crate::math::{Rgb, Vec3};

#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f64,
}

/// Light from an infinitely distant source in the direction of `position`.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f64,
    pub position: Vec3,
    pub cast_shadow: bool,
    pub shadow_map_size: u32,
}

/// Sky/ground gradient light; normals facing `position` get the sky colour.
#[derive(Debug, Clone, Copy)]
pub struct HemisphereLight {
    pub sky: Rgb,
    pub ground: Rgb,
    pub intensity: f64,
    pub position: Vec3,
}

/// The fixed light rig of the avatar scene.
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub hemisphere: HemisphereLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight { color: Rgb::from_hex(AMBIENT_COLOR), intensity: AMBIENT_INTENSITY },
            directional: DirectionalLight {
                color: Rgb::from_hex(DIRECTIONAL_COLOR),
                intensity: DIRECTIONAL_INTENSITY,
                position: Vec3::from_tuple(DIRECTIONAL_POSITION),
                cast_shadow: true,
                shadow_map_size: SHADOW_MAP_SIZE,
            },
            hemisphere: HemisphereLight {
                sky: Rgb::from_hex(HEMISPHERE_SKY),
                ground: Rgb::from_hex(HEMISPHERE_GROUND),
                intensity: HEMISPHERE_INTENSITY,
                position: Vec3::from_tuple(HEMISPHERE_POSITION),
            },
        }
    }
}

impl Lighting {
    /// Direction from the scene towards the directional light.
    #[must_use]
    pub fn sun_direction(&self) -> Vec3 {
        self.directional.position.normalize()
    }

    /// Total incoming light on a surface with unit `normal`.
    #[must_use]
    pub fn irradiance(&self, normal: Vec3) -> Rgb {
        let ambient = self.ambient.color.scale(self.ambient.intensity);

        let up = self.hemisphere.position.normalize();
        let sky_weight = 0.5 * normal.dot(up) + 0.5;
        let hemi = self
            .hemisphere
            .ground
            .lerp(self.hemisphere.sky, sky_weight)
            .scale(self.hemisphere.intensity);

        let lambert = normal.dot(self.sun_direction()).max(0.0);
        let sun = self.directional.color.scale(self.directional.intensity * lambert);

        ambient.add(hemi).add(sun)
    }

    /// Shade a diffuse surface of colour `albedo`.
    #[must_use]
    pub fn shade(&self, albedo: Rgb, normal: Vec3) -> Rgb {
        albedo.mul(self.irradiance(normal))
    }

    /// Where a point's shadow lands on the horizontal plane `y = floor_y`.
    #[must_use]
    pub fn shadow_on_floor(&self, point: Vec3, floor_y: f64) -> Option<Vec3> {
        if !self.directional.cast_shadow {
            return None;
        }
        let dir = self.sun_direction();
        if dir.y <= f64::EPSILON {
            return None;
        }
        let t = (point.y - floor_y) / dir.y;
        Some(point - dir * t)
    }
}
