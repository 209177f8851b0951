use crate::blockchain::ChainView;
use crate::lessons::DataExample;
use crate::transaction::{DemoTx, fee_bar_width};
use crate::wallet::{KeyInfo, SignatureOutcome};

/// Turns widget display models into region content.
pub trait Renderer: Send + Sync {
    fn chain(&self, view: &ChainView) -> String;
    fn key_info(&self, info: &KeyInfo) -> String;
    fn signature(&self, outcome: &SignatureOutcome) -> String;
    fn mempool(&self, pending: &[DemoTx]) -> String;
    fn block_slots(&self, picked: &[DemoTx]) -> String;
    fn data_example(&self, example: &DataExample) -> String;
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn fee_bar(fee: f64) -> String {
    format!(
        r#"<span class="fee-bar" style="width:{}px"></span>"#,
        fee_bar_width(fee)
    )
}

/// Markup for the learning page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn chain(&self, view: &ChainView) -> String {
        let mut out: String = view
            .blocks
            .iter()
            .map(|b| {
                format!(
                    concat!(
                        r#"<article class="content" style="margin-top:.5rem;">"#,
                        "<strong>Block {}</strong>",
                        "<p>{}</p>",
                        r#"<p class="output">prev: {}...</p>"#,
                        r#"<p class="output">hash: {}...</p>"#,
                        "</article>"
                    ),
                    b.label,
                    escape_html(&b.payload),
                    escape_html(&b.previous_prefix),
                    escape_html(&b.digest_prefix),
                )
            })
            .collect();
        out.push_str(&format!(
            r#"<p class="warning" style="margin-top:.8rem;">{}</p>"#,
            escape_html(&view.note)
        ));
        out
    }

    fn key_info(&self, info: &KeyInfo) -> String {
        format!(
            concat!(
                r#"<p><span class="badge">Demo wallet identity</span></p>"#,
                r#"<p class="output">public key: {}...</p>"#,
                r#"<p class="output">wallet address: {}...</p>"#
            ),
            info.public_key_prefix, info.address_prefix
        )
    }

    fn signature(&self, outcome: &SignatureOutcome) -> String {
        match outcome {
            SignatureOutcome::Signed { signature_prefix } => format!(
                r#"<p>Message signed with private key.</p><p class="output">signature: {signature_prefix}...</p>"#
            ),
            SignatureOutcome::Valid => concat!(
                r#"<p class="badge">Valid signature ✓</p>"#,
                "<p>Integrity check passed: this exact message matches the original signed content.</p>"
            )
            .to_string(),
            SignatureOutcome::Invalid => concat!(
                r#"<p class="danger">Invalid signature ✗</p>"#,
                "<p>Either the message changed or there is no signature yet.</p>"
            )
            .to_string(),
        }
    }

    fn mempool(&self, pending: &[DemoTx]) -> String {
        if pending.is_empty() {
            return "<li>No transactions yet.</li>".to_string();
        }
        pending
            .iter()
            .enumerate()
            .map(|(i, tx)| {
                format!(
                    "<li>#{}: {} → {}, amount {}, fee {}{}</li>",
                    i + 1,
                    escape_html(&tx.from),
                    escape_html(&tx.to),
                    tx.amount,
                    tx.fee,
                    fee_bar(tx.fee)
                )
            })
            .collect()
    }

    fn block_slots(&self, picked: &[DemoTx]) -> String {
        if picked.is_empty() {
            return "<li>Block is empty.</li>".to_string();
        }
        picked
            .iter()
            .enumerate()
            .map(|(i, tx)| {
                format!(
                    "<li><strong>Slot {}</strong> {} → {} | fee {}{}</li>",
                    i + 1,
                    escape_html(&tx.from),
                    escape_html(&tx.to),
                    tx.fee,
                    fee_bar(tx.fee)
                )
            })
            .collect()
    }

    fn data_example(&self, example: &DataExample) -> String {
        format!("<strong>{}</strong><p>{}</p>", example.title, example.text)
    }
}

#[cfg(test)]
mod tests {
    use super::{HtmlRenderer, Renderer, escape_html};
    use crate::blockchain::{ChainDemo, ChainView};
    use crate::digest::Sha256Digest;
    use crate::transaction::{DemoTx, TxDraft};
    use crate::wallet::SignatureOutcome;
    use std::sync::Arc;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn chain_cards_and_note() {
        let chain = ChainDemo::new(Arc::new(Sha256Digest))
            .recompute("<script>x</script>")
            .unwrap();
        let html = HtmlRenderer.chain(&ChainView::from_chain(&chain));

        assert_eq!(html.matches("<article").count(), 3);
        assert!(html.contains("<strong>Block 01</strong>"));
        assert!(html.contains("<strong>Block 03</strong>"));
        assert!(html.contains("prev: GENESIS..."));
        assert!(html.contains(&format!("hash: {}...", &chain[0].digest[..28])));
        assert!(html.contains(&format!("prev: {}...", &chain[1].digest[..18])));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.ends_with(
            "breaks every linked block after it.</p>"
        ));
    }

    #[test]
    fn empty_lists() {
        assert_eq!(HtmlRenderer.mempool(&[]), "<li>No transactions yet.</li>");
        assert_eq!(HtmlRenderer.block_slots(&[]), "<li>Block is empty.</li>");
    }

    #[test]
    fn mempool_rows() {
        let tx = DemoTx::from_draft(&TxDraft {
            fee: Some(5.0),
            ..TxDraft::default()
        })
        .unwrap();
        let html = HtmlRenderer.mempool(&[tx]);
        assert_eq!(
            html,
            r#"<li>#1: Alice → Bob, amount 1, fee 5<span class="fee-bar" style="width:40px"></span></li>"#
        );
    }

    #[test]
    fn signature_messages() {
        assert!(HtmlRenderer.signature(&SignatureOutcome::Valid).contains("Valid signature"));
        assert!(HtmlRenderer.signature(&SignatureOutcome::Invalid).contains("class=\"danger\""));
    }
}
