use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use eaip::fields::{parse_circle, parse_elevation, parse_point};
use eaip::{Document, SectionKind};

const CIRCLE: &str = "A circle radius 3 KM centered on 465700N 0185100E";
const POINT: &str = "472616.8N 0191444.0E";

const ROW: &str = r#"<tr id="ENR-5.1-LHR{n}">
  <td>
    <p>LHR{n} / TISZA</p>
    <p>480000N 0180000E - 473000N 0190000E - 470000N 0183000E - 472000N 0175000E</p>
  </td>
  <td>5000 FT ALT / GND</td>
  <td><p>Military activity</p><p>MON-FRI 0700-1500</p></td>
</tr>"#;

/// Benchmark the field grammars
fn bench_fields(c: &mut Criterion) {
    c.bench_function("point", |b| b.iter(|| parse_point("bench", black_box(POINT))));

    c.bench_function("circle", |b| {
        b.iter(|| parse_circle("bench", black_box(CIRCLE)))
    });

    c.bench_function("elevation", |b| {
        b.iter(|| parse_elevation(black_box("5000 FT ALT")))
    });
}

/// Benchmark parsing a whole ENR 5.1 section
fn bench_section(c: &mut Criterion) {
    let rows: String = (0..500).map(|n| ROW.replace("{n}", &n.to_string())).collect();
    let xml = format!("<Sub-section><table><tbody>{rows}</tbody></table></Sub-section>");
    let document = Document::default();

    let mut group = c.benchmark_group("ENR 5.1");
    group.throughput(Throughput::Bytes(xml.len() as u64));

    group.bench_function("xml tree", |b| b.iter(|| eaip_xml::parse(black_box(&xml))));

    group.bench_function("airspaces", |b| {
        b.iter(|| {
            let data = document
                .parse_xml(SectionKind::Airspace, black_box(&xml))
                .expect("section should parse");
            black_box(data.airspaces().len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fields, bench_section);
criterion_main!(benches);
