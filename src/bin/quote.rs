//! GlobalX 报价向导 - 逐行交互版
//!
//! 在终端按 10 个步骤填写报价表单：任一提示处输入 `back` 返回上一步，`quit` 退出。
//! 生成报价后打印汇总，可选导出报价单到配置的目录。

use std::time::Duration;

use anyhow::Context;
use globalx::{
    config::{load_config_or_default, AppConfig},
    observability,
    quotation::{
        compute_distance, export_with_notice, locations::countries, Direction, FieldId,
        FileExporter, QuotationWizard, QuoteSummary, Side, StepOutcome, TransportMode,
        WizardStep,
    },
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

/// 一次提示的结果
enum Answer {
    Value(String),
    Back,
    Quit,
}

/// 标准输入逐行读取
struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn ask(&mut self, label: &str) -> anyhow::Result<Answer> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(format!("{label}: ").as_bytes()).await?;
        stdout.flush().await?;
        // EOF 视为退出
        let Some(line) = self.lines.next_line().await? else {
            return Ok(Answer::Quit);
        };
        let line = line.trim().to_string();
        Ok(match line.to_lowercase().as_str() {
            "back" => Answer::Back,
            "quit" | "exit" => Answer::Quit,
            _ => Answer::Value(line),
        })
    }
}

/// 步骤处理结果：继续当前流程、返回上一步或退出
enum Flow {
    Next,
    Back,
    Quit,
}

macro_rules! answer {
    ($prompt:expr, $label:expr) => {
        match $prompt.ask($label).await? {
            Answer::Value(v) => v,
            Answer::Back => return Ok(Flow::Back),
            Answer::Quit => return Ok(Flow::Quit),
        }
    };
}

fn report(outcome: StepOutcome) {
    if let Some(err) = outcome.validation_error {
        println!("⚠️  {}", err);
    }
}

/// 逐个设置字段，值无效时提示后重问
async fn fill(
    prompt: &mut Prompt,
    wizard: &mut QuotationWizard,
    field: FieldId,
    label: &str,
) -> anyhow::Result<Flow> {
    loop {
        let value = answer!(prompt, label);
        match wizard.set_field(field, &value) {
            Ok(()) => return Ok(Flow::Next),
            Err(e) => println!("⚠️  {}", e),
        }
    }
}

async fn fill_all(
    prompt: &mut Prompt,
    wizard: &mut QuotationWizard,
    fields: &[(FieldId, &str)],
) -> anyhow::Result<Flow> {
    for (field, label) in fields {
        match fill(prompt, wizard, *field, label).await? {
            Flow::Next => {}
            other => return Ok(other),
        }
    }
    Ok(Flow::Next)
}

async fn pick_port(
    prompt: &mut Prompt,
    wizard: &mut QuotationWizard,
    side: Side,
) -> anyhow::Result<Flow> {
    let (country_field, port_field, title) = match side {
        Side::Origin => (FieldId::OriginCountry, FieldId::OriginPort, "Origin"),
        Side::Dest => (FieldId::DestCountry, FieldId::DestPort, "Destination"),
    };
    println!("   Countries: {}", countries().collect::<Vec<_>>().join(", "));
    if let flow @ (Flow::Back | Flow::Quit) =
        fill(prompt, wizard, country_field, &format!("{title} country")).await?
    {
        return Ok(flow);
    }
    let ports = wizard.ports(side);
    if ports.is_empty() {
        println!("   (no known ports, enter any location)");
    }
    for (i, port) in ports.iter().enumerate() {
        println!("   {}. {}", i + 1, port);
    }
    let value = answer!(prompt, &format!("{title} port"));
    // 可输入序号或直接输入名称
    let port = value
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ports.get(i).map(|p| p.to_string()))
        .unwrap_or(value);
    wizard.set_field(port_field, &port)?;
    Ok(Flow::Next)
}

async fn run_step(
    prompt: &mut Prompt,
    wizard: &mut QuotationWizard,
    cfg: &AppConfig,
) -> anyhow::Result<Flow> {
    let auto_advance = Duration::from_millis(cfg.quotation.auto_advance_ms);
    match wizard.step() {
        WizardStep::TransportMode => {
            let ids: Vec<&str> = TransportMode::ALL.iter().map(|m| m.id()).collect();
            println!("   Options: {}", ids.join(", "));
            let value = answer!(prompt, "Mode");
            match value.parse::<TransportMode>() {
                Ok(mode) => {
                    tokio::time::sleep(auto_advance).await;
                    report(wizard.select_mode(mode));
                }
                Err(e) => println!("⚠️  {}", e),
            }
        }
        WizardStep::Direction => {
            let value = answer!(prompt, "Import or Export");
            match value.parse::<Direction>() {
                Ok(direction) => {
                    tokio::time::sleep(auto_advance).await;
                    report(wizard.select_direction(direction));
                }
                Err(e) => println!("⚠️  {}", e),
            }
        }
        WizardStep::Cargo => {
            if let flow @ (Flow::Back | Flow::Quit) =
                fill(prompt, wizard, FieldId::CargoType, "Cargo category").await?
            {
                return Ok(flow);
            }
            report(wizard.advance());
        }
        WizardStep::Route => {
            for side in [Side::Origin, Side::Dest] {
                if let flow @ (Flow::Back | Flow::Quit) = pick_port(prompt, wizard, side).await? {
                    return Ok(flow);
                }
            }
            report(wizard.advance());
        }
        WizardStep::Dimensions => {
            let flow = fill_all(
                prompt,
                wizard,
                &[
                    (FieldId::Weight, "Weight (kg)"),
                    (FieldId::Length, "Length (cm)"),
                    (FieldId::Width, "Width (cm)"),
                    (FieldId::Height, "Height (cm)"),
                ],
            )
            .await?;
            if !matches!(flow, Flow::Next) {
                return Ok(flow);
            }
            let cw = wizard.chargeable_weight();
            println!(
                "   Volume {:.3} m³ │ volumetric {:.2} kg │ chargeable {:.2} kg",
                cw.volume_m3, cw.volumetric_kg, cw.chargeable_kg
            );
            report(wizard.advance());
        }
        WizardStep::ServiceOptions => {
            answer!(prompt, "Press Enter to continue");
            report(wizard.advance());
        }
        WizardStep::RouteAnalysis => {
            answer!(prompt, "Press Enter to analyze the route");
            println!("   Analyzing route…");
            tokio::time::sleep(Duration::from_millis(cfg.quotation.analyze_delay_ms)).await;
            let form = wizard.form();
            let km = compute_distance(&form.origin_country, &form.dest_country);
            println!("   Route distance: {} km", km);
            report(wizard.advance());
        }
        WizardStep::Parties => {
            let flow = fill_all(
                prompt,
                wizard,
                &[
                    (FieldId::ConsigneeName, "Consignee name"),
                    (FieldId::ConsigneeEmail, "Consignee email"),
                    (FieldId::ShipperName, "Shipper name"),
                ],
            )
            .await?;
            if !matches!(flow, Flow::Next) {
                return Ok(flow);
            }
            report(wizard.advance());
        }
        WizardStep::QuoteGeneration => {
            answer!(prompt, "Press Enter to generate the quote");
            match wizard.generate_quote() {
                Ok(outcome) => report(outcome),
                Err(e) => println!("⚠️  {}", e),
            }
        }
        WizardStep::Summary => {
            let Some(quote) = wizard.quote() else {
                return Ok(Flow::Back);
            };
            let summary = QuoteSummary::from_result(quote);
            println!();
            for line in summary.to_lines() {
                println!("   {}", line);
            }
            println!();
            let exporter = FileExporter::new(&cfg.export.output_dir, cfg.export.format);
            loop {
                let value = answer!(prompt, "Export quotation document? [y/N]");
                if !value.eq_ignore_ascii_case("y") {
                    return Ok(Flow::Quit);
                }
                match export_with_notice(&exporter, &summary).await {
                    Ok(path) => {
                        println!("✅ Saved to {}", path.display());
                        return Ok(Flow::Quit);
                    }
                    Err(notice) => {
                        println!("❌ {}", notice.message);
                        if !notice.retryable {
                            return Ok(Flow::Quit);
                        }
                    }
                }
            }
        }
    }
    Ok(Flow::Next)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init("info");

    let cfg = load_config_or_default(None);
    let mut wizard = QuotationWizard::new();
    let mut prompt = Prompt::new();

    println!("🚚 {} │ Quotation", cfg.app.name);
    println!("   Type `back` to return to the previous step, `quit` to leave.");

    let mut shown = 0u8;
    loop {
        if wizard.current_step() != shown {
            shown = wizard.current_step();
            println!();
            println!("[{}] {}", wizard.progress_label(), wizard.step().title());
        }
        match run_step(&mut prompt, &mut wizard, &cfg)
            .await
            .context("Quotation step failed")?
        {
            Flow::Next => {}
            Flow::Back => {
                wizard.retreat();
            }
            Flow::Quit => break,
        }
    }

    Ok(())
}
