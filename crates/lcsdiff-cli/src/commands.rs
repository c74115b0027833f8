use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use tracing::{debug, info};

use lcsdiff_core::{apply_text, reverse_text, try_diff_text, EditKind, Granularity, TextEdit};
use lcsdiff_wire::UpdatePayload;

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli, config: &CliConfig) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, format, config),
        Command::Apply(args) => cmd_apply(args),
        Command::Revert(args) => cmd_revert(args),
        Command::Encode(args) => cmd_encode(args),
        Command::Decode(args) => cmd_decode(args, format, config),
    }
}

fn cmd_diff(args: DiffArgs, format: OutputFormat, config: &CliConfig) -> anyhow::Result<()> {
    print!("{}", diff_output(&args, format, config)?);
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    print!("{}", apply_output(&args)?);
    Ok(())
}

fn cmd_revert(args: RevertArgs) -> anyhow::Result<()> {
    print!("{}", revert_output(&args)?);
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    print!("{}", encode_output(&args)?);
    Ok(())
}

fn cmd_decode(args: DecodeArgs, format: OutputFormat, config: &CliConfig) -> anyhow::Result<()> {
    print!("{}", decode_output(&args, format, config.color)?);
    Ok(())
}

fn diff_output(args: &DiffArgs, format: OutputFormat, config: &CliConfig) -> anyhow::Result<String> {
    let old = read_text(&args.old)?;
    let new = read_text(&args.new)?;
    let granularity = if args.lines {
        Granularity::Lines
    } else {
        config.granularity
    };

    let edits = try_diff_text(&old, &new, granularity, &config.limits())
        .with_context(|| format!("diffing {} against {}", args.old.display(), args.new.display()))?;
    info!(
        old = %args.old.display(),
        new = %args.new.display(),
        ?granularity,
        changes = edits.len(),
        "computed edit script"
    );

    render(&edits, format, args.dependency, config.color)
}

fn apply_output(args: &ApplyArgs) -> anyhow::Result<String> {
    let base = read_text(&args.base)?;
    let edits = load_script(&args.script)?;
    apply_text(&base, &edits)
        .with_context(|| format!("applying {} to {}", args.script.display(), args.base.display()))
}

fn revert_output(args: &RevertArgs) -> anyhow::Result<String> {
    let new = read_text(&args.new)?;
    let edits = load_script(&args.script)?;
    apply_text(&new, &reverse_text(&edits))
        .with_context(|| format!("reverting {} on {}", args.script.display(), args.new.display()))
}

fn encode_output(args: &EncodeArgs) -> anyhow::Result<String> {
    let edits = load_script(&args.script)?;
    let payload = UpdatePayload::new(args.dependency, edits);
    Ok(format!("{}\n", hex::encode(payload.encode())))
}

fn decode_output(args: &DecodeArgs, format: OutputFormat, color: bool) -> anyhow::Result<String> {
    if format == OutputFormat::Hex {
        bail!("decode prints text or json; --format hex is not supported");
    }
    let bytes = hex::decode(args.hex.trim()).context("payload is not valid hex")?;
    let payload = UpdatePayload::decode(&bytes).context("decoding update payload")?;
    debug!(dependency = payload.dependency, changes = payload.changes.len(), "decoded payload");

    if format == OutputFormat::Json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&payload)?));
    }
    let changes = render(&payload.changes, OutputFormat::Text, payload.dependency, color)?;
    Ok(format!("dependency: {}\n{changes}", payload.dependency))
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Read a JSON array of text edits, as printed by `diff --format json`.
fn load_script(path: &Path) -> anyhow::Result<Vec<TextEdit>> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).with_context(|| format!("parsing edit script {}", path.display()))
}

fn render(
    edits: &[TextEdit],
    format: OutputFormat,
    dependency: u32,
    color: bool,
) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Text if edits.is_empty() => "No changes.\n".to_string(),
        OutputFormat::Text => edits
            .iter()
            .map(|edit| format!("{}\n", format_edit(edit, color)))
            .collect(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(edits)?),
        OutputFormat::Hex => {
            let payload = UpdatePayload::new(dependency, edits.to_vec());
            format!("{}\n", hex::encode(payload.encode()))
        }
    };
    Ok(out)
}

fn format_edit(edit: &TextEdit, color: bool) -> String {
    let line = format!("{} {} {:?}", edit.kind.tag(), edit.index, edit.text);
    if !color {
        return line;
    }
    match edit.kind {
        EditKind::Delete => line.red().to_string(),
        EditKind::Insert => line.green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use lcsdiff_core::diff_text;

    #[test]
    fn text_lines_are_tag_index_and_quoted_run() {
        let edits = diff_text("A", "B");
        assert_eq!(render(&edits, OutputFormat::Text, 0, false).unwrap(), "D 0 \"A\"\nI 0 \"B\"\n");
    }

    #[test]
    fn text_escapes_newlines() {
        let edit = TextEdit::insert(3, "x\ny");
        assert_eq!(format_edit(&edit, false), "I 3 \"x\\ny\"");
    }

    #[test]
    fn empty_script_says_no_changes() {
        assert_eq!(render(&[], OutputFormat::Text, 0, false).unwrap(), "No changes.\n");
    }

    #[test]
    fn json_output_loads_back_as_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        let edits = diff_text("ABCBDAB", "BDCABA");
        fs::write(&path, render(&edits, OutputFormat::Json, 0, false).unwrap()).unwrap();
        assert_eq!(load_script(&path).unwrap(), edits);
    }

    #[test]
    fn hex_output_decodes_to_payload() {
        let edits = vec![TextEdit::delete(0, "A")];
        let hex_line = render(&edits, OutputFormat::Hex, 7, false).unwrap();
        assert_eq!(hex_line, "0000000703004441\n");
        let bytes = hex::decode(hex_line.trim()).unwrap();
        assert_eq!(UpdatePayload::decode(&bytes).unwrap(), UpdatePayload::new(7, edits));
    }

    struct Workspace {
        dir: tempfile::TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn file(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        }
    }

    fn plain() -> CliConfig {
        CliConfig {
            color: false,
            ..CliConfig::default()
        }
    }

    fn diff_json(ws: &Workspace, old: &str, new: &str, lines: bool) -> PathBuf {
        let args = DiffArgs {
            old: ws.file("old.txt", old),
            new: ws.file("new.txt", new),
            lines,
            dependency: 0,
        };
        let json = diff_output(&args, OutputFormat::Json, &plain()).unwrap();
        ws.file("script.json", &json)
    }

    #[test]
    fn diff_text_output_lists_ops() {
        let ws = Workspace::new();
        let args = DiffArgs {
            old: ws.file("old.txt", "ABCBDAB"),
            new: ws.file("new.txt", "BDCABA"),
            lines: false,
            dependency: 0,
        };
        assert_eq!(
            diff_output(&args, OutputFormat::Text, &plain()).unwrap(),
            "D 0 \"A\"\nD 4 \"D\"\nD 6 \"B\"\nI 1 \"D\"\nI 3 \"A\"\n"
        );
    }

    #[test]
    fn diff_honors_configured_ceiling() {
        let ws = Workspace::new();
        let args = DiffArgs {
            old: ws.file("old.txt", "abcd"),
            new: ws.file("new.txt", "wxyz"),
            lines: false,
            dependency: 0,
        };
        let config = CliConfig {
            limits: lcsdiff_core::DiffLimits { max_cells: 4 },
            ..plain()
        };
        let err = diff_output(&args, OutputFormat::Text, &config).unwrap_err();
        assert!(err.to_string().contains("diffing"));
    }

    #[test]
    fn apply_replays_a_json_diff() {
        let ws = Workspace::new();
        let (old, new) = ("the quick brown fox\n", "the quack brown box\n");
        let script = diff_json(&ws, old, new, false);
        let args = ApplyArgs {
            base: ws.file("base.txt", old),
            script,
        };
        assert_eq!(apply_output(&args).unwrap(), new);
    }

    #[test]
    fn revert_undoes_a_line_diff() {
        let ws = Workspace::new();
        let (old, new) = ("alpha\nbeta\ngamma\n", "alpha\nBETA\ngamma\ndelta\n");
        let script = diff_json(&ws, old, new, true);
        let args = RevertArgs {
            new: ws.file("current.txt", new),
            script,
        };
        assert_eq!(revert_output(&args).unwrap(), old);
    }

    #[test]
    fn apply_reports_out_of_range_script() {
        let ws = Workspace::new();
        let args = ApplyArgs {
            base: ws.file("base.txt", "ab"),
            script: ws.file(
                "script.json",
                r#"[{"kind":"delete","index":18446744073709551615,"text":"a"}]"#,
            ),
        };
        let err = apply_output(&args).unwrap_err();
        assert!(err.to_string().contains("applying"));
    }

    #[test]
    fn encode_then_decode_as_text_and_json() {
        let ws = Workspace::new();
        let script = diff_json(&ws, "A", "B", false);
        let hex_line = encode_output(&EncodeArgs {
            script,
            dependency: 9,
        })
        .unwrap();
        assert_eq!(hex_line, "000000090300444103004942\n");

        let args = DecodeArgs { hex: hex_line };
        assert_eq!(
            decode_output(&args, OutputFormat::Text, false).unwrap(),
            "dependency: 9\nD 0 \"A\"\nI 0 \"B\"\n"
        );

        let json = decode_output(&args, OutputFormat::Json, false).unwrap();
        let payload: UpdatePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(
            payload,
            UpdatePayload::new(9, vec![TextEdit::delete(0, "A"), TextEdit::insert(0, "B")])
        );
    }

    #[test]
    fn decode_rejects_hex_format() {
        let args = DecodeArgs {
            hex: "00000000".to_string(),
        };
        let err = decode_output(&args, OutputFormat::Hex, false).unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn decode_rejects_bad_hex() {
        let args = DecodeArgs { hex: "zz".to_string() };
        let err = decode_output(&args, OutputFormat::Text, false).unwrap_err();
        assert!(err.to_string().contains("not valid hex"));
    }

    #[test]
    fn bad_script_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();
        let err = load_script(&path).unwrap_err();
        assert!(err.to_string().contains("parsing edit script"));
    }
}
