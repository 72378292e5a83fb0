//! Bundled convolution shader templates.
//!
//! Each template contains a single `$CONVOLUTION$` token where the
//! generated accumulation statement goes. The statement assigns the
//! `result` variable, a `vec4` declared by the template. Constants
//! (`TextureStepX`, `TextureStepY`, `Filter<i>`) are inserted at module
//! scope after the preamble.

/// Default placeholder token.
pub const CONVOLUTION_PLACEHOLDER: &str = "$CONVOLUTION$";

/// GLSL ES 1.00 fragment shader.
///
/// Expects a `Texture0` sampler and a `TextureCoord` varying from the
/// vertex stage.
pub const GLSL_CONVOLUTION: &str = r#"#ifdef GL_ES
precision mediump float;
#endif

uniform sampler2D Texture0;
varying vec2 TextureCoord;

void main(void)
{
    vec4 result;

    $CONVOLUTION$

    gl_FragColor = vec4(result.xyz, 1.0);
}
"#;

/// WGSL module with a full-screen triangle vertex stage.
pub const WGSL_CONVOLUTION: &str = r#"@group(0) @binding(0) var texture0: texture_2d<f32>;
@group(0) @binding(1) var sampler0: sampler;

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
};

@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> VertexOutput {
    let uv = vec2<f32>(f32((index << 1u) & 2u), f32(index & 2u));
    var out: VertexOutput;
    out.position = vec4<f32>(uv * 2.0 - 1.0, 0.0, 1.0);
    out.tex_coord = uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let tex_coord = in.tex_coord;
    var result: vec4<f32>;

    $CONVOLUTION$

    return vec4<f32>(result.xyz, 1.0);
}
"#;
