//! HandBrakeCLI argument rendering.
//!
//! Options are emitted category by category (see [`Category::EMITTED`]).
//! Within a category a few options lead in a fixed order; the rest follow
//! in table order.

use super::rotate::{rotation_code, rotation_settings};
use crate::keyfile::{Section, parse_bool, split_list};
use crate::registry::{Arity, Category, OptionDescriptor, Registry, ValueType};

/// Options that lead their category, in emission order.
fn leading(category: Category) -> &'static [&'static str] {
    match category {
        Category::Filters => &[
            "decomb",
            "deinterlace",
            "denoise",
            "hqdn3d",
            "nlmeans",
            "grayscale",
            "rotate",
        ],
        Category::Audio => &["aencoder", "ab", "aq"],
        Category::Video => &[
            "encoder", "vb", "quality", "rate", "vfr", "cfr", "pfr", "two-pass", "turbo",
        ],
        Category::Source => &["title", "chapters"],
        _ => &[],
    }
}

/// Options of `category` in emission order.
fn ordered(registry: &Registry, category: Category) -> Vec<&'static OptionDescriptor> {
    let lead = leading(category);
    let mut options: Vec<&'static OptionDescriptor> =
        lead.iter().filter_map(|name| registry.get(name)).collect();
    options.extend(
        registry
            .options()
            .filter(|o| o.category == category && !lead.contains(&o.name)),
    );
    options
}

/// Render every HandBrakeCLI option set in `section`, in category order.
///
/// hbr-only keys are never emitted. `-i`/`-o` are added by the caller.
pub fn build_args(registry: &Registry, section: &Section) -> Vec<String> {
    let mut args = Vec::new();
    for category in Category::EMITTED {
        for option in ordered(registry, category) {
            match option.name {
                "crop" => continue,
                "rotate" => render_rotate(option, section, &mut args),
                "format" => render_format(registry, option, section, &mut args),
                _ => render(option, section, &mut args),
            }
        }
        if category == Category::Picture {
            render_crop(section, &mut args);
        }
    }
    args
}

fn render(option: &OptionDescriptor, section: &Section, args: &mut Vec<String>) {
    let Some(value) = section.get(option.name) else {
        return;
    };
    let as_flag = option.arity == Arity::None
        || option.value_type == ValueType::Boolean
        || option.arity == Arity::Optional;
    if as_flag && let Some(enabled) = parse_bool(value) {
        render_switch(option, enabled, args);
        return;
    }
    if option.arity == Arity::None {
        return;
    }
    let value = if option.value_type.is_list() {
        let items = split_list(value, ',');
        if items.is_empty() {
            return;
        }
        items.join(",")
    } else {
        value.to_string()
    };
    render_value(option, &value, args);
}

/// `true` renders the bare flag; `false` renders `--no-<name>` when the
/// option is negatable and nothing otherwise.
fn render_switch(option: &OptionDescriptor, enabled: bool, args: &mut Vec<String>) {
    if enabled {
        match option.short {
            Some(flag) => args.push(format!("-{}", flag)),
            None => args.push(format!("--{}", option.name)),
        }
    } else if option.negatable {
        args.push(format!("--no-{}", option.name));
    }
}

/// Options taking an optional argument need it attached, so they always
/// use the long form.
fn render_value(option: &OptionDescriptor, value: &str, args: &mut Vec<String>) {
    match option.short {
        Some(flag) if option.arity != Arity::Optional => {
            args.push(format!("-{}", flag));
            args.push(value.to_string());
        }
        _ => args.push(format!("--{}={}", option.name, value)),
    }
}

/// Short container names map to HandBrake's muxer names. The oldest table
/// predates the `av_` names and takes the short ones.
fn render_format(
    registry: &Registry,
    option: &OptionDescriptor,
    section: &Section,
    args: &mut Vec<String>,
) {
    let Some(format) = section.get(option.name) else {
        return;
    };
    let legacy = registry.table_label() == "0.9.9";
    let format = match (format, legacy) {
        ("mkv", false) => "av_mkv",
        ("mp4", false) => "av_mp4",
        ("av_mkv", true) => "mkv",
        ("av_mp4", true) => "mp4",
        (other, _) => other,
    };
    render_value(option, format, args);
}

/// A set crop wins; otherwise `autocrop=false` disables cropping.
fn render_crop(section: &Section, args: &mut Vec<String>) {
    match section.get("crop").filter(|c| !c.is_empty()) {
        Some(crop) => args.push(format!("--crop={}", crop)),
        None if section.get_bool("autocrop") == Some(false) => {
            args.push("--crop=0:0:0:0".to_string());
        }
        None => {}
    }
}

fn render_rotate(option: &OptionDescriptor, section: &Section, args: &mut Vec<String>) {
    let Some(value) = section.get(option.name) else {
        return;
    };
    if let Some(enabled) = parse_bool(value) {
        render_switch(option, enabled, args);
        return;
    }
    let integer_table = option.value_type == ValueType::Integer;
    let code = rotation_code(value).or_else(|| {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| *n <= 7)
    });
    match code {
        Some(0) => {}
        Some(code) if integer_table => args.push(format!("--rotate={}", code)),
        Some(code) => {
            if let Some(settings) = rotation_settings(code) {
                args.push(format!("--rotate={}", settings));
            }
        }
        None => args.push(format!("--rotate={}", value)),
    }
}
