use std::collections::BTreeSet;

use naga::{AddressSpace, Binding, BuiltIn, Handle, Module, Type, TypeInner, VectorSize};

use super::ShaderStage;

/// Vertex attribute names the quad pipeline binds.
pub(crate) const POSITION_ATTRIBUTE: &str = "position";
pub(crate) const COLOR_ATTRIBUTE: &str = "color";

/// Uniform names the quad pipeline binds.
pub(crate) const PROJECTION_UNIFORM: &str = "projection";
pub(crate) const MODEL_UNIFORM: &str = "model";

/// Reflected vertex input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub location: u32,
    /// Float components (`vec3<f32>` = 3). `0` for non-float-vector types.
    pub components: u32,
}

/// Reflected uniform binding.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformSlot {
    pub group: u32,
    pub binding: u32,
    /// True for `mat4x4<f32>`.
    pub is_mat4: bool,
}

/// Locations resolved once after linking. Missing names stay `None`;
/// validation decides whether that is acceptable.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct LinkedInterface {
    pub vertex_entry: String,
    pub fragment_entry: String,
    pub position: Option<VertexAttribute>,
    pub color: Option<VertexAttribute>,
    pub projection: Option<UniformSlot>,
    pub model: Option<UniformSlot>,
}

/// Fully resolved interface of a validated program.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProgramInterface {
    pub vertex_entry: String,
    pub fragment_entry: String,
    pub position: VertexAttribute,
    pub color: VertexAttribute,
    pub projection: UniformSlot,
    pub model: UniformSlot,
}

/// Parses and validates one WGSL stage.
pub(crate) fn compile(stage: ShaderStage, source: &str) -> Result<Module, String> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| e.emit_to_string(source))?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    )
    .validate(&module)
    .map_err(|e| e.emit_to_string(source))?;

    if !module.entry_points.iter().any(|ep| ep.stage == stage.to_naga()) {
        return Err(format!("no @{stage} entry point in module"));
    }

    Ok(module)
}

/// Checks the stage interface and resolves attribute/uniform locations.
pub(crate) fn link(vertex: &Module, fragment: &Module) -> Result<LinkedInterface, String> {
    let vs = entry_point(vertex, ShaderStage::Vertex)?;
    let fs = entry_point(fragment, ShaderStage::Fragment)?;

    let outputs = vs
        .function
        .result
        .as_ref()
        .map(|r| bindings_of(vertex, r.binding.as_ref(), r.ty))
        .unwrap_or_default();

    let writes_position = outputs
        .iter()
        .any(|(_, b)| matches!(b, Binding::BuiltIn(BuiltIn::Position { .. })));
    if !writes_position {
        return Err(format!("vertex entry point `{}` does not write @builtin(position)", vs.name));
    }

    let out_locations: BTreeSet<u32> = outputs.iter().filter_map(|(_, b)| location(b)).collect();
    for (name, binding) in inputs(fragment, fs) {
        if let Some(loc) = location(&binding) {
            if !out_locations.contains(&loc) {
                return Err(format!(
                    "fragment input `{}` at location {loc} is not written by the vertex stage",
                    name.as_deref().unwrap_or("<unnamed>")
                ));
            }
        }
    }

    let vertex_inputs = inputs(vertex, vs);
    let attribute = |wanted: &str| {
        vertex_inputs.iter().find_map(|(name, binding)| {
            let (Some(name), Some(loc)) = (name.as_deref(), location(binding)) else {
                return None;
            };
            (name == wanted).then(|| VertexAttribute {
                location: loc,
                components: 0,
            })
        })
    };
    let position = attribute(POSITION_ATTRIBUTE)
        .map(|a| with_components(vertex, vs, POSITION_ATTRIBUTE, a));
    let color = attribute(COLOR_ATTRIBUTE).map(|a| with_components(vertex, vs, COLOR_ATTRIBUTE, a));

    Ok(LinkedInterface {
        vertex_entry: vs.name.clone(),
        fragment_entry: fs.name.clone(),
        position,
        color,
        projection: uniform(vertex, fragment, PROJECTION_UNIFORM)?,
        model: uniform(vertex, fragment, MODEL_UNIFORM)?,
    })
}

/// Checks the linked interface against the fixed quad vertex layout.
pub(crate) fn validate(linked: &LinkedInterface) -> Result<ProgramInterface, String> {
    let position = linked
        .position
        .ok_or_else(|| format!("vertex attribute `{POSITION_ATTRIBUTE}` not found"))?;
    let color = linked
        .color
        .ok_or_else(|| format!("vertex attribute `{COLOR_ATTRIBUTE}` not found"))?;
    let projection = linked
        .projection
        .ok_or_else(|| format!("uniform `{PROJECTION_UNIFORM}` not found"))?;
    let model = linked
        .model
        .ok_or_else(|| format!("uniform `{MODEL_UNIFORM}` not found"))?;

    if position.components != 3 {
        return Err(format!(
            "`{POSITION_ATTRIBUTE}` must be vec3<f32>, found {} components",
            position.components
        ));
    }
    if color.components != 4 {
        return Err(format!(
            "`{COLOR_ATTRIBUTE}` must be vec4<f32>, found {} components",
            color.components
        ));
    }
    if position.location == color.location {
        return Err(format!("attributes share location {}", position.location));
    }
    for (name, slot) in [(PROJECTION_UNIFORM, projection), (MODEL_UNIFORM, model)] {
        if !slot.is_mat4 {
            return Err(format!("uniform `{name}` must be mat4x4<f32>"));
        }
        if slot.group != 0 {
            return Err(format!("uniform `{name}` must live in bind group 0, found {}", slot.group));
        }
    }
    if projection.binding == model.binding {
        return Err(format!("uniforms share binding {}", model.binding));
    }

    Ok(ProgramInterface {
        vertex_entry: linked.vertex_entry.clone(),
        fragment_entry: linked.fragment_entry.clone(),
        position,
        color,
        projection,
        model,
    })
}

fn entry_point(module: &Module, stage: ShaderStage) -> Result<&naga::EntryPoint, String> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage.to_naga())
        .ok_or_else(|| format!("no @{stage} entry point"))
}

/// Flattens an argument or result into `(name, binding)` pairs, descending
/// one level into structs.
fn bindings_of(
    module: &Module,
    binding: Option<&Binding>,
    ty: Handle<Type>,
) -> Vec<(Option<String>, Binding)> {
    if let Some(b) = binding {
        return vec![(None, b.clone())];
    }
    match &module.types[ty].inner {
        TypeInner::Struct { members, .. } => members
            .iter()
            .filter_map(|m| m.binding.clone().map(|b| (m.name.clone(), b)))
            .collect(),
        _ => Vec::new(),
    }
}

fn inputs(module: &Module, ep: &naga::EntryPoint) -> Vec<(Option<String>, Binding)> {
    ep.function
        .arguments
        .iter()
        .flat_map(|arg| {
            let mut flat = bindings_of(module, arg.binding.as_ref(), arg.ty);
            if arg.binding.is_some() {
                flat[0].0 = arg.name.clone();
            }
            flat
        })
        .collect()
}

fn location(binding: &Binding) -> Option<u32> {
    match binding {
        Binding::Location { location, .. } => Some(*location),
        _ => None,
    }
}

fn with_components(
    module: &Module,
    ep: &naga::EntryPoint,
    name: &str,
    attr: VertexAttribute,
) -> VertexAttribute {
    let ty = ep.function.arguments.iter().find_map(|arg| {
        if arg.binding.is_some() {
            return (arg.name.as_deref() == Some(name)).then_some(arg.ty);
        }
        match &module.types[arg.ty].inner {
            TypeInner::Struct { members, .. } => members
                .iter()
                .find(|m| m.name.as_deref() == Some(name) && m.binding.is_some())
                .map(|m| m.ty),
            _ => None,
        }
    });

    let components = ty.map_or(0, |ty| match &module.types[ty].inner {
        TypeInner::Vector { size, scalar } if scalar.kind == naga::ScalarKind::Float => {
            vector_len(*size)
        }
        TypeInner::Scalar(scalar) if scalar.kind == naga::ScalarKind::Float => 1,
        _ => 0,
    });

    VertexAttribute { components, ..attr }
}

fn vector_len(size: VectorSize) -> u32 {
    match size {
        VectorSize::Bi => 2,
        VectorSize::Tri => 3,
        VectorSize::Quad => 4,
    }
}

fn uniform_in(module: &Module, name: &str) -> Option<UniformSlot> {
    module.global_variables.iter().find_map(|(_, var)| {
        if var.name.as_deref() != Some(name) || var.space != AddressSpace::Uniform {
            return None;
        }
        let rb = var.binding.as_ref()?;
        let is_mat4 = matches!(
            module.types[var.ty].inner,
            TypeInner::Matrix {
                columns: VectorSize::Quad,
                rows: VectorSize::Quad,
                ..
            }
        );
        Some(UniformSlot {
            group: rb.group,
            binding: rb.binding,
            is_mat4,
        })
    })
}

/// A uniform declared by both stages must agree on its slot.
fn uniform(vertex: &Module, fragment: &Module, name: &str) -> Result<Option<UniformSlot>, String> {
    match (uniform_in(vertex, name), uniform_in(fragment, name)) {
        (Some(a), Some(b)) if a != b => Err(format!(
            "uniform `{name}` declared at @group({}) @binding({}) and @group({}) @binding({})",
            a.group, a.binding, b.group, b.binding
        )),
        (a, b) => Ok(a.or(b)),
    }
}
