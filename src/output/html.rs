//! Self-contained HTML report with a collapsible directory tree

use std::io::Write;

use crate::error::Result;
use crate::tree::DirNode;

use super::json::to_json;

const DATA_PLACEHOLDER: &str = "{{DATA}}";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Disk Space Visualizer</title>
<style>
html, body { font: 14px/20px "Courier New", Courier, monospace }
ul { list-style: none; padding: 0 0 5px 10px }
li { cursor: pointer }
span { display: block; padding: 3px }
li:hover > span { background: #efefef }
.hidden { display: none }
</style>
</head>
<body>
<h1>Disk Space Analyzer</h1>
<ul id="root"></ul>
<script id="data" type="application/json">
{{DATA}}
</script>
<script>
function render(node) {
  var li = document.createElement("li");
  var label = document.createElement("span");
  var hasChildren = node.subDirs && node.subDirs.length > 0;
  label.title = node.fullPath;
  label.textContent = (hasChildren ? "+ " : "  ") + node.path + " (" + node.size + ")";
  li.appendChild(label);
  if (hasChildren) {
    var list = document.createElement("ul");
    list.className = "hidden";
    node.subDirs.forEach(function (child) { list.appendChild(render(child)); });
    li.appendChild(list);
    label.addEventListener("click", function () {
      var open = list.classList.toggle("hidden") === false;
      label.textContent = (open ? "- " : "+ ") + node.path + " (" + node.size + ")";
    });
  }
  return li;
}
var data = JSON.parse(document.getElementById("data").textContent);
document.getElementById("root").appendChild(render(data));
</script>
</body>
</html>
"#;

/// Render the report page with the tree embedded as compact JSON.
pub fn render_html(node: &DirNode) -> Result<String> {
    let json = to_json(node, false)?;
    // Keep "</script>" inside a path from ending the data block early
    let json = json.replace("</", "<\\/");
    Ok(TEMPLATE.replace(DATA_PLACEHOLDER, &json))
}

pub fn write_html<W: Write>(writer: &mut W, node: &DirNode) -> Result<()> {
    writer.write_all(render_html(node)?.as_bytes())?;
    Ok(())
}
