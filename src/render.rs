use crate::constants::*;
use crate::core::{CameraOrbit, ParticleField, ParticleSpin, SphereMotion, GROUP_TILT_Z, SCENE_WGSL};
use glam::{Mat4, Vec3};
use web_sys as web;

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    particle_model: [[f32; 4]; 4],
    sphere_model: [[f32; 4]; 4],
    particle_color: [f32; 4],
    sphere_color: [f32; 4],
    light_a: [f32; 4], // xyz position, w ambient intensity
    light_b: [f32; 4], // xyz position, w particle size
    time: f32,
    _pad: [f32; 3],
}

/// Per-frame scene snapshot handed over by the frame loop. Pure state in,
/// pixels out; the renderer holds no opinion on how these advance.
#[derive(Clone, Copy, Debug)]
pub struct SceneFrame {
    pub spin: ParticleSpin,
    pub sphere: SphereMotion,
    pub orbit: CameraOrbit,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    particle_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    particle_vb: wgpu::Buffer,
    particle_count: u32,

    sphere_pipeline: wgpu::RenderPipeline,
    sphere_vb: wgpu::Buffer,
    sphere_ib: wgpu::Buffer,
    sphere_index_count: u32,

    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        field: &ParticleField,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        // Quad vertex buffer (two triangles), shared billboard geometry
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = create_buffer_init(
            &device,
            "quad_vb",
            bytemuck::cast_slice(&quad_vertices),
            wgpu::BufferUsages::VERTEX,
        );

        // Static particle positions; generated once, never rewritten
        let particle_vb = create_buffer_init(
            &device,
            "particle_vb",
            bytemuck::cast_slice(field.positions()),
            wgpu::BufferUsages::VERTEX,
        );
        let particle_count = field.point_count() as u32;

        let particle_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: one cloud point per instance
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                }],
            },
        ];
        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_particle"),
                buffers: &particle_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_particle"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    // Additive glow over the clear color
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::SrcAlpha,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // Distorted sphere mesh
        let (sphere_vertices, sphere_indices) = build_sphere_mesh(SPHERE_RINGS, SPHERE_SEGMENTS);
        let sphere_vb = create_buffer_init(
            &device,
            "sphere_vb",
            bytemuck::cast_slice(&sphere_vertices),
            wgpu::BufferUsages::VERTEX,
        );
        let sphere_ib = create_buffer_init(
            &device,
            "sphere_ib",
            bytemuck::cast_slice(&sphere_indices),
            wgpu::BufferUsages::INDEX,
        );
        let sphere_index_count = sphere_indices.len() as u32;

        let sphere_buffers = [wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 6) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }];
        let sphere_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sphere"),
                buffers: &sphere_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sphere"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            uniform_buffer,
            bind_group,
            particle_pipeline,
            quad_vb,
            particle_vb,
            particle_count,
            sphere_pipeline,
            sphere_vb,
            sphere_ib,
            sphere_index_count,
            width,
            height,
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, dt_sec: f32, scene: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms(scene)),
        );

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("backdrop_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.particle_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.particle_vb.slice(..));
            rpass.draw(0..6, 0..self.particle_count);

            rpass.set_pipeline(&self.sphere_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere_vb.slice(..));
            rpass.set_index_buffer(self.sphere_ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere_index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn uniforms(&self, scene: &SceneFrame) -> SceneUniforms {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_DEG.to_radians(),
            aspect,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        );
        let view = Mat4::look_at_rh(scene.orbit.eye(), Vec3::ZERO, Vec3::Y);

        // Fixed Z tilt on the whole cloud, accumulated spin inside it
        let particle_model = Mat4::from_rotation_z(GROUP_TILT_Z)
            * Mat4::from_rotation_x(scene.spin.x)
            * Mat4::from_rotation_y(scene.spin.y);

        let sphere_model =
            Mat4::from_translation(SPHERE_OFFSET + Vec3::Y * scene.sphere.bob_y())
                * Mat4::from_rotation_y(scene.sphere.angle)
                * Mat4::from_rotation_x(scene.sphere.angle * 0.5)
                * Mat4::from_scale(Vec3::splat(SPHERE_SCALE));

        SceneUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            particle_model: particle_model.to_cols_array_2d(),
            sphere_model: sphere_model.to_cols_array_2d(),
            particle_color: [
                PARTICLE_COLOR[0],
                PARTICLE_COLOR[1],
                PARTICLE_COLOR[2],
                1.0,
            ],
            sphere_color: [SPHERE_COLOR[0], SPHERE_COLOR[1], SPHERE_COLOR[2], 1.0],
            light_a: [LIGHT_A_POS.x, LIGHT_A_POS.y, LIGHT_A_POS.z, AMBIENT_INTENSITY],
            light_b: [LIGHT_B_POS.x, LIGHT_B_POS.y, LIGHT_B_POS.z, PARTICLE_SIZE],
            time: self.time_accum,
            _pad: [0.0; 3],
        }
    }
}

fn create_buffer_init(
    device: &wgpu::Device,
    label: &str,
    contents: &[u8],
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    use wgpu::util::DeviceExt;
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents,
        usage,
    })
}

/// Interleaved position+normal UV-sphere of radius 1. For a unit sphere the
/// normal equals the position, but both are kept so the shader displaces
/// along a stable normal.
fn build_sphere_mesh(rings: u32, segments: u32) -> (Vec<f32>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1) * 6) as usize);
    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        for seg in 0..=segments {
            let theta = 2.0 * std::f32::consts::PI * seg as f32 / segments as f32;
            let x = phi.sin() * theta.cos();
            let y = phi.cos();
            let z = phi.sin() * theta.sin();
            vertices.extend_from_slice(&[x, y, z, x, y, z]);
        }
    }
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    let cols = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * cols + seg;
            let b = a + cols;
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    (vertices, indices)
}
